//! # Display Indexes
//!
//! The store addresses snippets by zero-based position. Users see and type
//! one-based numbers instead (`1` is the first snippet). [`DisplayIndex`] is the
//! user-facing number; [`DisplayIndex::position`] converts it back.
//!
//! Display indexes are always taken from the full, unfiltered sequence: a
//! snippet shown as `3.` in a search result is `3` everywhere, so a filtered
//! view can be used to pick the target of an edit or delete.
//!
//! Because identity is positional, an index is only valid until the next
//! delete.

use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// Zero-based store position. Display index `0` has no position and
    /// maps to `-1`, which the store rejects like any out-of-range index.
    /// Indexes past `i64::MAX` saturate.
    pub fn position(self) -> i64 {
        i64::try_from(self.0).map_or(i64::MAX, |i| i - 1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = SnipzError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches('.');
        trimmed
            .parse::<usize>()
            .map(DisplayIndex)
            .map_err(|_| SnipzError::Api(format!("Invalid index: {}", s)))
    }
}

/// A snippet together with the index it is shown under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnippet {
    pub index: DisplayIndex,
    pub snippet: Snippet,
}

impl DisplaySnippet {
    pub fn new(position: usize, snippet: Snippet) -> Self {
        Self {
            index: DisplayIndex::from_position(position),
            snippet,
        }
    }
}

/// Tags every snippet with its display index.
pub fn index_snippets(snippets: &[Snippet]) -> Vec<DisplaySnippet> {
    snippets
        .iter()
        .enumerate()
        .map(|(position, snippet)| DisplaySnippet::new(position, snippet.clone()))
        .collect()
}
