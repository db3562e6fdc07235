use crate::error::{Result, SnipzError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// A snippet as laid out in an editor buffer: the first line is the title,
/// then a blank line, then the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }

    /// Leading blank lines are skipped; a missing separator line is
    /// tolerated.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines().skip_while(|l| l.trim().is_empty());
        let title = lines.next().unwrap_or_default().trim().to_string();
        let rest: Vec<&str> = lines.collect();
        Self {
            title,
            content: rest.join("\n").trim().to_string(),
        }
    }
}

/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(SnipzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close, and returns the
/// file's contents. `$EDITOR` may carry arguments (`code --wait`).
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or_default();
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| SnipzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(|source| SnipzError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Round-trips `initial` through the user's editor via a temporary file.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("snipz_edit_{}.txt", std::process::id()));

    fs::write(&temp_file, initial.to_buffer()).map_err(|source| SnipzError::Io {
        path: temp_file.clone(),
        source,
    })?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_buffer() {
        let ec = EditorContent::new("My Title".to_string(), "Some content here.".to_string());
        assert_eq!(ec.to_buffer(), "My Title\n\nSome content here.");
    }

    #[test]
    fn test_from_buffer_normal() {
        let ec = EditorContent::from_buffer("My Title\n\nThis is content.\nMore content.\n");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "This is content.\nMore content.");
    }

    #[test]
    fn test_from_buffer_title_only() {
        let ec = EditorContent::from_buffer("My Title");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "");
    }

    #[test]
    fn test_from_buffer_empty() {
        let ec = EditorContent::from_buffer("");
        assert_eq!(ec, EditorContent::new(String::new(), String::new()));
    }

    #[test]
    fn test_from_buffer_no_blank_separator() {
        let ec = EditorContent::from_buffer("Title\nContent without blank");
        assert_eq!(ec.title, "Title");
        assert_eq!(ec.content, "Content without blank");
    }

    #[test]
    fn test_from_buffer_skips_leading_blank_lines() {
        let ec = EditorContent::from_buffer("\n\n  Title  \n\nbody");
        assert_eq!(ec.title, "Title");
        assert_eq!(ec.content, "body");
    }

    #[test]
    fn test_buffer_keeps_code_indentation() {
        let original = EditorContent::new(
            "loop".to_string(),
            "for x in xs {\n    println!(\"{x}\");\n}".to_string(),
        );
        let parsed = EditorContent::from_buffer(&original.to_buffer());
        assert_eq!(parsed, original);
    }
}
