use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplaySnippet};
use crate::store::{Backend, SnippetStore};

use super::helpers::resolve_indexes;

/// Deletes every requested snippet. All indexes are resolved against the
/// list as it was before the call, then removed from the highest position
/// down so earlier ones are not shifted by later removals.
pub fn run<B: Backend>(store: &mut SnippetStore<B>, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let mut positions = resolve_indexes(store, indexes)?;
    positions.sort_unstable();
    positions.dedup();

    let mut result = CmdResult::default();
    let mut removed = Vec::with_capacity(positions.len());
    for position in positions.into_iter().rev() {
        let snippet = store.delete(position)?;
        removed.push(DisplaySnippet::new(position, snippet));
    }
    removed.reverse();

    for ds in &removed {
        result.add_message(CmdMessage::success(format!(
            "Snippet deleted ({}): {}",
            ds.index, ds.snippet.title
        )));
    }
    if !removed.is_empty() && !store.is_empty() {
        result.add_message(CmdMessage::info(
            "Indexes have shifted; list again before editing or deleting.",
        ));
    }
    Ok(result.with_affected_snippets(removed))
}
