use super::Backend;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;

/// The authoritative, ordered list of snippets and its persisted mirror.
///
/// Snippets are identified by position. [`SnippetStore::delete`] shifts every
/// later snippet down by one, so indexes captured before a delete are stale
/// afterwards.
///
/// [`SnippetStore::load`] must run exactly once before anything else;
/// [`SnippetStore::open`] does both steps.
pub struct SnippetStore<B: Backend> {
    backend: B,
    snippets: Vec<Snippet>,
    loaded: bool,
}

impl<B: Backend> SnippetStore<B> {
    /// Creates an unloaded, empty store.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            snippets: Vec::new(),
            loaded: false,
        }
    }

    /// Creates a store and loads it.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    /// Reads the persisted sequence. A backend with nothing saved yields an
    /// empty store. On failure the in-memory sequence is left untouched.
    pub fn load(&mut self) -> Result<()> {
        let loaded = self.backend.load()?;
        self.snippets = loaded.unwrap_or_default();
        self.loaded = true;
        Ok(())
    }

    /// Writes the full sequence through the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save(&self.snippets)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrowed view of every snippet, in order.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Owned copy of every snippet, in order.
    pub fn get_all(&self) -> Vec<Snippet> {
        self.snippets.clone()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Snippet> {
        self.snippets.get(index).ok_or(SnipzError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: self.snippets.len(),
        })
    }

    /// Turns a caller-supplied (possibly negative) index into a position
    /// inside `[0, len)`.
    pub fn checked_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.snippets.len())
            .ok_or(SnipzError::IndexOutOfRange {
                index,
                len: self.snippets.len(),
            })
    }

    /// Appends a snippet and saves. Returns its index.
    ///
    /// A failed save is returned as is: the snippet stays in memory and the
    /// file lags behind until the next successful save.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<usize> {
        let snippet = Snippet::new(title, content)?;
        self.snippets.push(snippet);
        self.save()?;
        Ok(self.snippets.len() - 1)
    }

    /// Replaces the snippet at `index` and saves.
    pub fn update(
        &mut self,
        index: usize,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        self.get(index)?;
        let snippet = Snippet::new(title, content)?;
        self.snippets[index] = snippet;
        self.save()
    }

    /// Removes the snippet at `index`, shifting later ones down, and saves.
    pub fn delete(&mut self, index: usize) -> Result<Snippet> {
        self.get(index)?;
        let removed = self.snippets.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Snippets whose title contains `query`, ignoring case, in store order.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Snippet> {
        self.search_indexed(query)
            .into_iter()
            .map(|(_, snippet)| snippet.clone())
            .collect()
    }

    /// Like [`search`](Self::search), paired with each hit's position in the
    /// full sequence.
    pub fn search_indexed(&self, query: &str) -> Vec<(usize, &Snippet)> {
        let needle = query.to_lowercase();
        self.snippets
            .iter()
            .enumerate()
            .filter(|(_, snippet)| snippet.title_matches(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::fs::JsonFileBackend;
    use crate::store::memory::fixtures::{empty_store, store_with_titles};
    use crate::store::memory::MemoryBackend;
    use std::fs;
    use tempfile::TempDir;

    fn titles<B: Backend>(store: &SnippetStore<B>) -> Vec<String> {
        store.snippets().iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn open_on_empty_backend_yields_empty_store() {
        let store = empty_store();
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = SnippetStore::open(JsonFileBackend::new(dir.path().join("none.json"))).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_fails_and_leaves_store_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippets.json");
        fs::write(&path, "[{\"title\": ").unwrap();

        let mut store = SnippetStore::new(JsonFileBackend::new(&path));
        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut store = store_with_titles(&["kept"]);
        store.backend().set_simulate_corrupt_data(true);
        assert!(store.load().is_err());
        assert_eq!(titles(&store), vec!["kept"]);
    }

    #[test]
    fn round_trips_through_a_fresh_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippets.json");

        let mut store = SnippetStore::open(JsonFileBackend::new(&path)).unwrap();
        store.add("first", "one").unwrap();
        store.add("second", "two\nlines").unwrap();
        store.add("ünïcode", "✓").unwrap();

        let reopened = SnippetStore::open(JsonFileBackend::new(&path)).unwrap();
        assert_eq!(reopened.get_all(), store.get_all());
    }

    #[test]
    fn add_appends_and_persists() {
        let mut store = empty_store();
        let index = store.add("Title", "Body").unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.backend().persisted(), Some(store.get_all()));
    }

    #[test]
    fn add_rejects_empty_fields_without_changes() {
        let mut store = store_with_titles(&["a"]);
        for (title, content) in [("", "x"), ("x", ""), ("", "")] {
            let err = store.add(title, content).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(titles(&store), vec!["a"]);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn add_is_not_rolled_back_when_save_fails() {
        let mut store = store_with_titles(&["a"]);
        store.backend().set_simulate_write_error(true);

        let err = store.add("b", "body").unwrap_err();
        assert!(err.is_storage());
        assert_eq!(titles(&store), vec!["a", "b"]);
        assert_eq!(store.backend().persisted().unwrap().len(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = store_with_titles(&["a", "b", "c"]);
        store.update(1, "B", "new body").unwrap();
        assert_eq!(titles(&store), vec!["a", "B", "c"]);
        assert_eq!(store.get(1).unwrap().content, "new body");
        assert_eq!(store.backend().persisted(), Some(store.get_all()));
    }

    #[test]
    fn update_checks_index_before_fields() {
        let mut store = store_with_titles(&["a"]);
        let err = store.update(3, "", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn update_rejects_empty_fields() {
        let mut store = store_with_titles(&["a"]);
        let err = store.update(0, "a", " ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.get(0).unwrap().content, "Content for a");
    }

    #[test]
    fn out_of_range_indexes_are_rejected() {
        let mut store = store_with_titles(&["a", "b"]);
        let len = store.len();

        assert_eq!(store.update(len, "x", "y").unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(store.delete(len).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(store.checked_index(-1).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(
            store.checked_index(len as i64).unwrap_err().kind(),
            ErrorKind::Index
        );
        assert_eq!(store.checked_index(1).unwrap(), 1);
        assert_eq!(titles(&store), vec!["a", "b"]);
    }

    #[test]
    fn delete_shifts_later_indexes_down() {
        let mut store = store_with_titles(&["zero", "one", "two"]);
        let removed = store.delete(0).unwrap();
        assert_eq!(removed.title, "zero");
        assert_eq!(store.get(0).unwrap().title, "one");
        assert_eq!(store.get(1).unwrap().title, "two");
        assert_eq!(store.backend().persisted(), Some(store.get_all()));
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let store = store_with_titles(&["Alpha", "beta", "ALPHABET"]);

        let hits: Vec<_> = store.search("alpha").into_iter().map(|s| s.title).collect();
        assert_eq!(hits, vec!["Alpha", "ALPHABET"]);
        assert_eq!(store.search("").len(), 3);
        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn search_only_looks_at_titles() {
        let store = store_with_titles(&["Alpha"]);
        assert!(store.search("content").is_empty());
    }

    #[test]
    fn indexed_search_reports_store_positions() {
        let store = store_with_titles(&["Alpha", "beta", "ALPHABET"]);
        let positions: Vec<_> = store.search_indexed("ALPHA").iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn get_all_is_a_copy() {
        let store = store_with_titles(&["a"]);
        let mut copy = store.get_all();
        copy.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mutations_rewrite_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippets.json");
        let mut store = SnippetStore::open(JsonFileBackend::new(&path)).unwrap();

        store.add("a", "1").unwrap();
        store.add("b", "2").unwrap();
        store.update(0, "A", "1!").unwrap();
        store.delete(1).unwrap();

        let on_disk: Vec<Snippet> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, store.get_all());
        assert_eq!(on_disk, vec![Snippet::new("A", "1!").unwrap()]);
    }

    #[test]
    fn memory_backend_starts_without_saves() {
        let store = SnippetStore::open(MemoryBackend::new()).unwrap();
        assert_eq!(store.backend().save_count(), 0);
        assert_eq!(store.backend().persisted(), None);
    }
}
