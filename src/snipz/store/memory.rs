use super::Backend;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory backend for tests and development. Does NOT persist data.
///
/// Uses `RefCell` so the `Backend` trait can take `&self`; snipz is
/// single-threaded.
#[derive(Default)]
pub struct MemoryBackend {
    saved: RefCell<Option<Vec<Snippet>>>,
    simulate_write_error: Cell<bool>,
    simulate_corrupt_data: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `snippets` already persisted.
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        let backend = Self::new();
        *backend.saved.borrow_mut() = Some(snippets);
        backend
    }

    /// Makes every following `save` fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Makes every following `load` fail as if the data were malformed.
    pub fn set_simulate_corrupt_data(&self, simulate: bool) {
        self.simulate_corrupt_data.set(simulate);
    }

    /// What a fresh `load` would see.
    pub fn persisted(&self) -> Option<Vec<Snippet>> {
        self.saved.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<Snippet>>> {
        if self.simulate_corrupt_data.get() {
            return Err(SnipzError::Serialization {
                path: PathBuf::from(self.describe()),
                source: serde::de::Error::custom("Simulated corrupt data"),
            });
        }
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, snippets: &[Snippet]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SnipzError::Io {
                path: PathBuf::from(self.describe()),
                source: io::Error::new(io::ErrorKind::Other, "Simulated write error"),
            });
        }
        *self.saved.borrow_mut() = Some(snippets.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::SnippetStore;

    /// Builds a loaded store over a `MemoryBackend` holding `titles`, each
    /// with generated content.
    pub fn store_with_titles(titles: &[&str]) -> SnippetStore<MemoryBackend> {
        let snippets = titles
            .iter()
            .map(|title| Snippet {
                title: title.to_string(),
                content: format!("Content for {}", title),
            })
            .collect();
        SnippetStore::open(MemoryBackend::with_snippets(snippets)).unwrap()
    }

    pub fn empty_store() -> SnippetStore<MemoryBackend> {
        SnippetStore::open(MemoryBackend::new()).unwrap()
    }
}
