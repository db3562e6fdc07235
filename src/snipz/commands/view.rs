use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{Backend, SnippetStore};

use super::helpers::snippets_by_indexes;

pub fn run<B: Backend>(store: &SnippetStore<B>, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let snippets = snippets_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_snippets(snippets))
}
