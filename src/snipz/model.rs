use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};

/// A titled piece of text. Snippets have no id of their own: they are
/// addressed by their position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub content: String,
}

impl Snippet {
    /// Builds a snippet after checking that neither field is blank.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let content = content.into();
        Self::validate(&title, &content)?;
        Ok(Self { title, content })
    }

    pub fn validate(title: &str, content: &str) -> Result<()> {
        let message = match (title.trim().is_empty(), content.trim().is_empty()) {
            (false, false) => return Ok(()),
            (true, true) => "Title and content cannot be empty",
            (true, false) => "Title cannot be empty",
            (false, true) => "Content cannot be empty",
        };
        Err(SnipzError::Validation(message.to_string()))
    }

    pub fn title_matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

/// Trims what a user typed before it reaches the store.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_string()
}
