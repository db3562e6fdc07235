use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplaySnippet;
use crate::store::{Backend, SnippetStore};

/// Title filter. Hits keep the index they have in the full list.
pub fn run<B: Backend>(store: &SnippetStore<B>, term: &str) -> Result<CmdResult> {
    let listed = store
        .search_indexed(term)
        .into_iter()
        .map(|(position, snippet)| DisplaySnippet::new(position, snippet.clone()))
        .collect();
    Ok(CmdResult::default().with_listed_snippets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::store_with_titles;

    #[test]
    fn hits_keep_their_full_list_index() {
        let store = store_with_titles(&["Alpha", "beta", "ALPHABET"]);
        let result = run(&store, "alpha").unwrap();

        let shown: Vec<_> = result
            .listed_snippets
            .iter()
            .map(|ds| (ds.index, ds.snippet.title.as_str()))
            .collect();
        assert_eq!(
            shown,
            vec![(DisplayIndex(1), "Alpha"), (DisplayIndex(3), "ALPHABET")]
        );
    }

    #[test]
    fn no_hits_is_empty() {
        let store = store_with_titles(&["Alpha"]);
        assert!(run(&store, "zzz").unwrap().listed_snippets.is_empty());
    }
}
