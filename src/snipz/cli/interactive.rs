//! # Interactive Shell
//!
//! A line-based edit form over the store. The shell keeps the form fields
//! (title and content) and a [`Session`] that knows whether a snippet is
//! selected; saving either adds or updates, depending on the selection.
//!
//! Errors never end the loop. Validation errors keep the form so the input
//! can be fixed, a stale index resets the form and redraws the list, and a
//! storage error is shown as a warning.

use super::render::{FormView, Output};
use snipz::api::{CmdMessage, SnipzApi};
use snipz::commands::helpers::resolve_index;
use snipz::error::{ErrorKind, Result, SnipzError};
use snipz::index::DisplayIndex;
use snipz::session::{SaveOutcome, Session};
use snipz::store::Backend;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "snipz> ";
const CONTENT_TERMINATOR: &str = ".";
const HELP: &str = "\
Commands:
  ls [query]     list snippets, or those whose title contains query
  sel N          load snippet N into the form for editing
  title TEXT     set the form title
  content TEXT   set the form content (without TEXT: type lines, end with '.')
  show           show the form
  save           add the form as a new snippet, or update the selected one
  rm             delete the selected snippet
  cancel         clear the form and stop editing
  help           show this help
  quit           leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List(Option<String>),
    Select(String),
    Title(String),
    Content(Option<String>),
    Show,
    Save,
    Remove,
    Cancel,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match word {
            "" => ShellCommand::Empty,
            "ls" | "list" => ShellCommand::List(arg),
            "sel" | "select" => ShellCommand::Select(rest.to_string()),
            "title" => ShellCommand::Title(rest.to_string()),
            "content" => ShellCommand::Content(arg),
            "show" => ShellCommand::Show,
            "save" => ShellCommand::Save,
            "rm" | "delete" => ShellCommand::Remove,
            "cancel" => ShellCommand::Cancel,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Default)]
struct Form {
    title: String,
    content: String,
}

struct Shell<'a, 't, B: Backend, W: Write> {
    api: &'a mut SnipzApi<B>,
    output: &'a Output<'t>,
    out: W,
    session: Session,
    form: Form,
}

pub fn run<B: Backend>(api: &mut SnipzApi<B>, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(api, output, stdin.lock(), stdout.lock())
        .map_err(|e| SnipzError::Api(format!("Shell I/O failed: {}", e)))
}

fn run_session<B: Backend, R: BufRead, W: Write>(
    api: &mut SnipzApi<B>,
    output: &Output,
    mut input: R,
    out: W,
) -> io::Result<()> {
    let mut shell = Shell {
        api,
        output,
        out,
        session: Session::new(),
        form: Form::default(),
    };

    shell.list(None)?;
    loop {
        write!(shell.out, "{}", PROMPT)?;
        shell.out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(shell.out)?;
            break;
        }

        let command = ShellCommand::parse(&line);
        log::debug!("shell command {:?}", command);
        match command {
            ShellCommand::Quit => break,
            ShellCommand::Content(None) => {
                let content = read_block(&mut input)?;
                shell.set_content(content)?;
            }
            command => shell.handle(command)?,
        }
    }
    shell.out.flush()
}

/// Reads lines until a line holding only `.` or end of input.
fn read_block<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == CONTENT_TERMINATOR {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

impl<B: Backend, W: Write> Shell<'_, '_, B, W> {
    fn handle(&mut self, command: ShellCommand) -> io::Result<()> {
        match command {
            ShellCommand::List(query) => self.list(query.as_deref()),
            ShellCommand::Select(index) => self.select(&index),
            ShellCommand::Title(title) => {
                self.form.title = title;
                self.show_form()
            }
            ShellCommand::Content(content) => self.set_content(content.unwrap_or_default()),
            ShellCommand::Show => self.show_form(),
            ShellCommand::Save => self.save(),
            ShellCommand::Remove => self.remove(),
            ShellCommand::Cancel => {
                self.session.cancel();
                self.form = Form::default();
                self.messages(&[CmdMessage::info("Form cleared.")])
            }
            ShellCommand::Help => write!(self.out, "{}", HELP),
            ShellCommand::Empty | ShellCommand::Quit => Ok(()),
            ShellCommand::Unknown(word) => self.messages(&[CmdMessage::error(format!(
                "Unknown command '{}'. Type help for a list of commands.",
                word
            ))]),
        }
    }

    fn list(&mut self, query: Option<&str>) -> io::Result<()> {
        let (result, empty_message) = match query {
            Some(query) => (self.api.search_snippets(query), "No snippets match."),
            None => (self.api.list_snippets(), "No snippets yet."),
        };
        match result {
            Ok(result) => {
                let text = self
                    .output
                    .snippet_list(&result.listed_snippets, empty_message);
                write!(self.out, "{}", text)
            }
            Err(e) => self.report(&e),
        }
    }

    fn select(&mut self, input: &str) -> io::Result<()> {
        let index = match input.parse::<DisplayIndex>() {
            Ok(index) => index,
            Err(e) => return self.report(&e),
        };

        let store = self.api.store();
        let selected = resolve_index(store, index)
            .and_then(|position| self.session.select(store, position).cloned());

        match selected {
            Ok(snippet) => {
                self.form = Form {
                    title: snippet.title,
                    content: snippet.content,
                };
                let view = self.api.view_snippets(&[index.to_string()]);
                if let Ok(view) = view {
                    let text = self.output.full_snippets(&view.listed_snippets);
                    write!(self.out, "{}", text)?;
                }
                self.show_form()
            }
            Err(e) => {
                self.session.cancel();
                self.form = Form::default();
                self.report(&e)?;
                self.list(None)
            }
        }
    }

    fn set_content(&mut self, content: String) -> io::Result<()> {
        self.form.content = content;
        self.show_form()
    }

    fn save(&mut self) -> io::Result<()> {
        let outcome = self
            .session
            .save(self.api.store_mut(), &self.form.title, &self.form.content);

        match outcome {
            Ok(outcome) => {
                let (verb, position) = match outcome {
                    SaveOutcome::Added(position) => ("added", position),
                    SaveOutcome::Updated(position) => ("updated", position),
                };
                self.form = Form::default();
                let title = self.form_title_at(position);
                self.messages(&[CmdMessage::success(format!(
                    "Snippet {} ({}): {}",
                    verb,
                    DisplayIndex::from_position(position),
                    title
                ))])?;
                self.list(None)
            }
            Err(e) if e.kind() == ErrorKind::Validation => self.report(&e),
            Err(e) => {
                self.form = Form::default();
                self.report(&e)?;
                self.list(None)
            }
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        match self.session.delete(self.api.store_mut()) {
            Ok(removed) => {
                self.form = Form::default();
                self.messages(&[
                    CmdMessage::success(format!("Snippet deleted: {}", removed.title)),
                    CmdMessage::info("Indexes have shifted."),
                ])?;
                self.list(None)
            }
            Err(SnipzError::NoSelection) => self.report(&SnipzError::NoSelection),
            Err(e) => {
                self.form = Form::default();
                self.report(&e)?;
                self.list(None)
            }
        }
    }

    fn form_title_at(&self, position: usize) -> String {
        self.api
            .store()
            .get(position)
            .map(|s| s.title.clone())
            .unwrap_or_default()
    }

    fn show_form(&mut self) -> io::Result<()> {
        let view = FormView::new(
            self.session.selected(),
            &self.form.title,
            &self.form.content,
        );
        let text = self.output.form(&view);
        write!(self.out, "{}", text)
    }

    fn report(&mut self, error: &SnipzError) -> io::Result<()> {
        let message = match error.kind() {
            ErrorKind::Storage => {
                CmdMessage::warning(format!("{} (changes kept in memory)", error))
            }
            _ => CmdMessage::error(error.to_string()),
        };
        self.messages(&[message])
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> io::Result<()> {
        let text = self.output.messages(messages);
        write!(self.out, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::styles::SNIPZ_THEMES;
    use snipz::model::Snippet;
    use snipz::store::memory::MemoryBackend;

    fn api_with(titles: &[&str]) -> SnipzApi<MemoryBackend> {
        let snippets = titles
            .iter()
            .map(|t| Snippet::new(*t, format!("Content for {}", t)).unwrap())
            .collect();
        SnipzApi::open(MemoryBackend::with_snippets(snippets)).unwrap()
    }

    fn session(api: &mut SnipzApi<MemoryBackend>, script: &str) -> String {
        let output = Output::with_theme(&SNIPZ_THEMES.dark, false);
        let mut out = Vec::new();
        run_session(api, &output, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn titles(api: &SnipzApi<MemoryBackend>) -> Vec<String> {
        api.store()
            .snippets()
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(ShellCommand::parse("ls"), ShellCommand::List(None));
        assert_eq!(
            ShellCommand::parse("ls  rust tips "),
            ShellCommand::List(Some("rust tips".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("sel 2"),
            ShellCommand::Select("2".to_string())
        );
        assert_eq!(ShellCommand::parse("content"), ShellCommand::Content(None));
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Quit);
        assert_eq!(
            ShellCommand::parse("frobnicate"),
            ShellCommand::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn adds_a_snippet_from_the_form() {
        let mut api = api_with(&[]);
        let out = session(&mut api, "title Greeting\ncontent hello\nsave\nquit\n");

        assert_eq!(titles(&api), vec!["Greeting"]);
        assert_eq!(api.store().get(0).unwrap().content, "hello");
        assert!(out.contains("Snippet added (1): Greeting"));
        assert!(out.contains("1. Greeting  hello"));
    }

    #[test]
    fn multi_line_content_ends_at_a_dot() {
        let mut api = api_with(&[]);
        session(&mut api, "title Poem\ncontent\nroses\nviolets\n.\nsave\n");
        assert_eq!(api.store().get(0).unwrap().content, "roses\nviolets");
    }

    #[test]
    fn selecting_then_saving_updates_in_place() {
        let mut api = api_with(&["a", "b"]);
        let out = session(&mut api, "sel 2\ntitle B\nsave\n");

        assert_eq!(titles(&api), vec!["a", "B"]);
        assert_eq!(api.store().get(1).unwrap().content, "Content for b");
        assert!(out.contains("editing 2 b"));
        assert!(out.contains("Snippet updated (2): B"));
    }

    #[test]
    fn empty_fields_keep_the_form() {
        let mut api = api_with(&["a"]);
        let out = session(&mut api, "sel 1\ntitle   \nsave\ntitle fixed\nsave\n");

        assert!(out.contains("Title cannot be empty"));
        assert_eq!(titles(&api), vec!["fixed"]);
        assert_eq!(api.store().get(0).unwrap().content, "Content for a");
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn out_of_range_selection_is_reported() {
        let mut api = api_with(&["a"]);
        let out = session(&mut api, "sel 5\nsel 0\nsel x\n");

        assert!(out.contains("No snippet at index 5"));
        assert!(out.contains("No snippet at index 0"));
        assert!(out.contains("Invalid index"));
    }

    #[test]
    fn rm_needs_a_selection() {
        let mut api = api_with(&["a"]);
        let out = session(&mut api, "rm\n");
        assert!(out.contains("Select a snippet to delete"));
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn rm_deletes_the_selected_snippet() {
        let mut api = api_with(&["a", "b", "c"]);
        let out = session(&mut api, "sel 2\nrm\n");
        assert_eq!(titles(&api), vec!["a", "c"]);
        assert!(out.contains("Snippet deleted: b"));
    }

    #[test]
    fn cancel_turns_save_into_add() {
        let mut api = api_with(&["a"]);
        session(&mut api, "sel 1\ncancel\ntitle new\ncontent body\nsave\n");
        assert_eq!(titles(&api), vec!["a", "new"]);
    }

    #[test]
    fn ls_filters_by_title() {
        let mut api = api_with(&["Rust tips", "Go tips", "rusty nails"]);
        let out = session(&mut api, "ls rust\n");
        assert!(out.contains("1. Rust tips"));
        assert!(out.contains("3. rusty nails"));
        let after_prompt = out.split(PROMPT).nth(1).unwrap();
        assert!(!after_prompt.contains("Go tips"));
    }

    #[test]
    fn storage_errors_do_not_end_the_session() {
        let mut api = api_with(&[]);
        api.store().backend().set_simulate_write_error(true);
        let out = session(&mut api, "title t\ncontent c\nsave\nhelp\n");

        assert!(out.contains("changes kept in memory"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let mut api = api_with(&[]);
        let out = session(&mut api, "jump\n");
        assert!(out.contains("Unknown command 'jump'"));
    }
}
