use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_snippets;
use crate::store::{Backend, SnippetStore};

pub fn run<B: Backend>(store: &SnippetStore<B>) -> Result<CmdResult> {
    let listed = index_snippets(store.snippets());
    Ok(CmdResult::default().with_listed_snippets(listed))
}
