use crate::error::{Result, SnipzError};
use crate::index::{DisplayIndex, DisplaySnippet};
use crate::store::{Backend, SnippetStore};

/// Maps a display index to a store position. Errors report the index the
/// user typed, not the zero-based position.
pub fn resolve_index<B: Backend>(store: &SnippetStore<B>, index: DisplayIndex) -> Result<usize> {
    store
        .checked_index(index.position())
        .map_err(|_| SnipzError::DisplayIndexOutOfRange {
            index: index.0,
            len: store.len(),
        })
}

pub fn resolve_indexes<B: Backend>(
    store: &SnippetStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<usize>> {
    indexes
        .iter()
        .map(|idx| resolve_index(store, *idx))
        .collect()
}

pub fn snippets_by_indexes<B: Backend>(
    store: &SnippetStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplaySnippet>> {
    let positions = resolve_indexes(store, indexes)?;
    let mut snippets = Vec::with_capacity(positions.len());
    for position in positions {
        let snippet = store.get(position)?.clone();
        snippets.push(DisplaySnippet::new(position, snippet));
    }
    Ok(snippets)
}
