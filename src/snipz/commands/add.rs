use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplaySnippet;
use crate::model::normalize_input;
use crate::store::{Backend, SnippetStore};

pub fn run<B: Backend>(
    store: &mut SnippetStore<B>,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let title = normalize_input(title);
    let content = normalize_input(content);

    let position = store.add(title, content)?;
    let added = DisplaySnippet::new(position, store.get(position)?.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added ({}): {}",
        added.index, added.snippet.title
    )));
    Ok(result.with_affected_snippets(vec![added]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::{empty_store, store_with_titles};

    #[test]
    fn adds_trimmed_snippet_at_the_end() {
        let mut store = store_with_titles(&["first"]);
        let result = run(&mut store, "  second ", "\nbody\n").unwrap();

        assert_eq!(result.affected_snippets[0].index, DisplayIndex(2));
        assert_eq!(store.get(1).unwrap().title, "second");
        assert_eq!(store.get(1).unwrap().content, "body");
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut store = empty_store();
        let err = run(&mut store, "   ", "body").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.is_empty());
    }
}
