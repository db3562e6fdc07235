//! # Rendering
//!
//! Turns command results into themed terminal text. Width calculations stay
//! in Rust because they need Unicode-aware processing; the templates only
//! decide structure and which named style applies where.

use super::styles::{names, SNIPZ_THEMES};
use super::templates::{
    FULL_SNIPPET_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, SESSION_TEMPLATE,
};
use super::theme::{render_with_color, stdout_supports_color, Theme};
use serde::Serialize;
use snipz::api::{CmdMessage, MessageLevel};
use snipz::config::ThemeMode;
use snipz::index::{DisplayIndex, DisplaySnippet};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const PREVIEW_GAP: &str = "  ";
const MIN_PREVIEW_WIDTH: usize = 8;
const RULE: &str = "--------------------------------";

#[derive(Serialize)]
struct ListLine {
    index: String,
    title: String,
    padding: String,
    preview: String,
}

#[derive(Serialize)]
struct ListData {
    lines: Vec<ListLine>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct FullSnippetEntry {
    index: String,
    title: String,
    content: String,
}

#[derive(Serialize)]
struct FullSnippetData {
    snippets: Vec<FullSnippetEntry>,
    rule: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// What the interactive shell shows about its edit form.
#[derive(Serialize)]
pub struct FormView {
    pub editing: bool,
    pub index: Option<DisplayIndex>,
    pub title: String,
    pub has_content: bool,
    pub content_summary: String,
}

impl FormView {
    pub fn new(selected: Option<usize>, title: &str, content: &str) -> Self {
        let lines = content.lines().count();
        Self {
            editing: selected.is_some(),
            index: selected.map(DisplayIndex::from_position),
            title: title.to_string(),
            has_content: !content.is_empty(),
            content_summary: match lines {
                1 => "(1 line)".to_string(),
                n => format!("({} lines)", n),
            },
        }
    }
}

/// A theme plus the decision whether to emit colors.
pub struct Output<'t> {
    theme: &'t Theme,
    use_color: bool,
}

impl Output<'static> {
    pub fn new(mode: ThemeMode, no_color: bool) -> Self {
        Self {
            theme: SNIPZ_THEMES.resolve(mode),
            use_color: !no_color && stdout_supports_color(),
        }
    }
}

impl<'t> Output<'t> {
    pub fn with_theme(theme: &'t Theme, use_color: bool) -> Self {
        Self { theme, use_color }
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String, minijinja::Error> {
        render_with_color(template, data, self.theme, self.use_color)
    }

    /// One line per snippet: index, title, and a preview of the first
    /// content line when it fits.
    pub fn snippet_list(&self, snippets: &[DisplaySnippet], empty_message: &str) -> String {
        let index_width = snippets
            .iter()
            .map(|ds| ds.index.to_string().len())
            .max()
            .unwrap_or(1);

        let lines = snippets
            .iter()
            .map(|ds| list_line(ds, index_width))
            .collect();
        let data = ListData {
            lines,
            empty: snippets.is_empty(),
            empty_message: empty_message.to_string(),
        };

        self.render(LIST_TEMPLATE, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn full_snippets(&self, snippets: &[DisplaySnippet]) -> String {
        let entries = snippets
            .iter()
            .map(|ds| FullSnippetEntry {
                index: format!("{}.", ds.index),
                title: ds.snippet.title.clone(),
                content: ds.snippet.content.clone(),
            })
            .collect();
        let data = FullSnippetData {
            snippets: entries,
            rule: RULE.to_string(),
        };

        self.render(FULL_SNIPPET_TEMPLATE, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: message_style(msg.level).to_string(),
                })
                .collect(),
        };

        self.render(MESSAGES_TEMPLATE, &data).unwrap_or_else(|_| {
            messages
                .iter()
                .map(|m| format!("{}\n", m.content))
                .collect()
        })
    }

    pub fn form(&self, form: &FormView) -> String {
        self.render(SESSION_TEMPLATE, form)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn print_messages(&self, messages: &[CmdMessage]) {
        let output = self.messages(messages);
        if !output.is_empty() {
            print!("{}", output);
        }
    }
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn list_line(ds: &DisplaySnippet, index_width: usize) -> ListLine {
    let index = format!("{:>width$}.", ds.index.0, width = index_width);
    let available = LINE_WIDTH.saturating_sub(index.width() + 1);

    let title = truncate_to_width(&single_line(&ds.snippet.title), available);
    let remaining = available.saturating_sub(title.width() + PREVIEW_GAP.len());

    let first_line = ds
        .snippet
        .content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    let preview = if remaining >= MIN_PREVIEW_WIDTH {
        truncate_to_width(first_line, remaining)
    } else {
        String::new()
    };

    ListLine {
        index,
        title,
        padding: PREVIEW_GAP.to_string(),
        preview,
    }
}

fn single_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

/// Cuts `s` to at most `max_width` columns, ending with `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
