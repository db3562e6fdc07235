//! # Storage Layer
//!
//! Persistence for snippets is split in two:
//!
//! - A [`Backend`] knows how to read and write the *whole* sequence of snippets.
//!   It has no notion of individual snippets, validation, or indexes.
//! - The [`SnippetStore`] owns the authoritative in-memory sequence, applies
//!   CRUD operations to it, and writes the full sequence back through its
//!   backend after every successful mutation.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileBackend`]: production storage, a single JSON file
//!   (`snippets.json` by default, relative to the working directory).
//! - [`memory::MemoryBackend`]: in-memory storage for tests, with write error
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "title": "example", "content": "some text" }
//! ]
//! ```
//!
//! The file is rewritten wholesale on every save. There is no schema version
//! and no append log.

use crate::error::Result;
use crate::model::Snippet;

pub mod fs;
pub mod memory;
pub mod snippet_store;

pub use snippet_store::SnippetStore;

/// Raw persistence of the snippet sequence.
pub trait Backend {
    /// Reads the persisted sequence.
    /// Returns `Ok(None)` when nothing was ever saved (first run).
    fn load(&self) -> Result<Option<Vec<Snippet>>>;

    /// Replaces the persisted sequence with `snippets`.
    fn save(&self, snippets: &[Snippet]) -> Result<()>;

    /// Human readable location, for messages.
    fn describe(&self) -> String;
}
