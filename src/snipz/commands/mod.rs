use crate::config::SnipzConfig;
use crate::index::{DisplayIndex, DisplaySnippet};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

/// Where snipz keeps its own settings.
#[derive(Debug, Clone)]
pub struct SnipzPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<DisplaySnippet>,
    pub listed_snippets: Vec<DisplaySnippet>,
    pub config: Option<SnipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<DisplaySnippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<DisplaySnippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_config(mut self, config: SnipzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SnippetUpdate {
    pub index: DisplayIndex,
    pub title: String,
    pub content: String,
}

impl SnippetUpdate {
    pub fn new(index: DisplayIndex, title: String, content: String) -> Self {
        Self {
            index,
            title,
            content,
        }
    }
}
