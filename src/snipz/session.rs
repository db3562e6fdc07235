//! # Editing Session
//!
//! State a shell keeps between user actions: whether a snippet is selected
//! for editing, and which one. It is owned by the shell and handed the store
//! on every call, so nothing lives at module scope.
//!
//! The flow mirrors a single edit form:
//!
//! - `select` loads a snippet into the form (editing mode).
//! - `save` adds a new snippet, or updates the selected one when editing.
//! - `delete` removes the selected snippet.
//! - `cancel` leaves editing mode.
//!
//! After a failed `save` the session stays as it was when the problem is the
//! user's input ([`ErrorKind::Validation`]), so they can fix it and retry. A
//! stale selection ([`ErrorKind::Index`]) resets the session instead.

use crate::error::{ErrorKind, Result, SnipzError};
use crate::model::{normalize_input, Snippet};
use crate::store::{Backend, SnippetStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(usize),
    Updated(usize),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub editing: bool,
    pub editing_index: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        if self.editing {
            self.editing_index
        } else {
            None
        }
    }

    /// Enters editing mode for the snippet at `index` and returns it.
    pub fn select<'s, B: Backend>(
        &mut self,
        store: &'s SnippetStore<B>,
        index: usize,
    ) -> Result<&'s Snippet> {
        match store.get(index) {
            Ok(snippet) => {
                self.editing = true;
                self.editing_index = Some(index);
                Ok(snippet)
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    pub fn save<B: Backend>(
        &mut self,
        store: &mut SnippetStore<B>,
        title: &str,
        content: &str,
    ) -> Result<SaveOutcome> {
        let title = normalize_input(title);
        let content = normalize_input(content);
        Snippet::validate(&title, &content)?;

        let outcome = match self.selected() {
            Some(index) => store
                .update(index, title, content)
                .map(|()| SaveOutcome::Updated(index)),
            None => store.add(title, content).map(SaveOutcome::Added),
        };

        match &outcome {
            Err(e) if e.kind() == ErrorKind::Validation => {}
            _ => self.reset(),
        }
        outcome
    }

    /// Deletes the selected snippet. Every index captured before this call
    /// is stale afterwards.
    pub fn delete<B: Backend>(&mut self, store: &mut SnippetStore<B>) -> Result<Snippet> {
        let index = self.selected().ok_or(SnipzError::NoSelection)?;
        let result = store.delete(index);
        self.reset();
        result
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.editing = false;
        self.editing_index = None;
    }
}
