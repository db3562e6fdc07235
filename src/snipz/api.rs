//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for snipz operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (index strings typed by a user become [`DisplayIndex`]es)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, format, or decide whether an error is fatal. That is the
//! caller's job: a load failure should stop a shell from starting, a save
//! failure is worth a visible warning, validation and index errors are
//! recoverable.
//!
//! `SnipzApi<B: Backend>` is generic over the storage backend:
//! - Production: `SnipzApi<JsonFileBackend>`
//! - Testing: `SnipzApi<MemoryBackend>`

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{Backend, SnippetStore};
use std::str::FromStr;

pub struct SnipzApi<B: Backend> {
    store: SnippetStore<B>,
}

impl<B: Backend> SnipzApi<B> {
    /// Wraps an already loaded store.
    pub fn new(store: SnippetStore<B>) -> Self {
        Self { store }
    }

    /// Loads `backend` into a fresh store. Fails if the persisted data can't
    /// be read.
    pub fn open(backend: B) -> Result<Self> {
        log::debug!("loading snippets from {}", backend.describe());
        let store = SnippetStore::open(backend)?;
        log::debug!("loaded {} snippets", store.len());
        Ok(Self::new(store))
    }

    pub fn add_snippet(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, content)
    }

    pub fn list_snippets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_snippets(&self, term: &str) -> Result<commands::CmdResult> {
        log::debug!("searching titles for {:?}", term);
        commands::search::run(&self.store, term)
    }

    pub fn view_snippets<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn update_snippet(
        &mut self,
        update: &commands::SnippetUpdate,
    ) -> Result<commands::CmdResult> {
        log::debug!("updating snippet {}", update.index);
        commands::update::run(&mut self.store, update)
    }

    pub fn delete_snippets<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        log::debug!("deleting snippets {:?}", indexes);
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }

    /// Direct store access for an interactive [`Session`](crate::session::Session).
    pub fn store_mut(&mut self) -> &mut SnippetStore<B> {
        &mut self.store
    }
}

/// Reads or changes configuration. Needs no loaded store, so a shell can
/// fix its settings even when the snippet file is unreadable.
pub fn configure(
    paths: &commands::SnipzPaths,
    action: ConfigAction,
) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SnipzPaths, SnippetUpdate};
