use crate::commands::{CmdMessage, CmdResult, SnippetUpdate};
use crate::error::Result;
use crate::index::DisplaySnippet;
use crate::model::normalize_input;
use crate::store::{Backend, SnippetStore};

use super::helpers::resolve_index;

pub fn run<B: Backend>(store: &mut SnippetStore<B>, update: &SnippetUpdate) -> Result<CmdResult> {
    let position = resolve_index(store, update.index)?;
    store.update(
        position,
        normalize_input(&update.title),
        normalize_input(&update.content),
    )?;

    let updated = DisplaySnippet::new(position, store.get(position)?.clone());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet updated ({}): {}",
        updated.index, updated.snippet.title
    )));
    Ok(result.with_affected_snippets(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::store_with_titles;

    #[test]
    fn updates_snippet_in_place() {
        let mut store = store_with_titles(&["a", "b"]);
        let update = SnippetUpdate::new(DisplayIndex(2), "B".into(), " New ".into());
        run(&mut store, &update).unwrap();

        assert_eq!(store.get(1).unwrap().title, "B");
        assert_eq!(store.get(1).unwrap().content, "New");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stale_index_is_reported() {
        let mut store = store_with_titles(&["a"]);
        let update = SnippetUpdate::new(DisplayIndex(2), "x".into(), "y".into());
        let err = run(&mut store, &update).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
    }
}
