//! Templates live in `templates/` as standalone files so they are easy to
//! edit and diff, and are included here as string constants.
//!
//! Line breaks are explicit (`{{ "\n" }}`) so whitespace never depends on how
//! block tags are laid out. Layout math (widths, truncation, padding) is done
//! in Rust and handed to templates as ready strings.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FULL_SNIPPET_TEMPLATE: &str = include_str!("templates/full_snippet.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const SESSION_TEMPLATE: &str = include_str!("templates/session.tmp");
