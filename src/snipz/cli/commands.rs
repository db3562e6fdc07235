//! # CLI Layer
//!
//! This module is **one possible UI client** for snipz. It is the only place
//! that knows about stdout/stderr, parses arguments, launches editors, and
//! decides which errors are fatal.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves config, theme and store file, loads the store
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::interactive;
use super::render::Output;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use snipz::api::{configure, ConfigAction, SnipzApi, SnipzPaths, SnippetUpdate};
use snipz::config::SnipzConfig;
use snipz::editor::{edit_content, EditorContent};
use snipz::error::{Result, SnipzError};
use snipz::index::DisplayIndex;
use snipz::store::fs::{JsonFileBackend, DEFAULT_STORE_FILE};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_DIR_ENV: &str = "SNIPZ_CONFIG_DIR";
const STORE_FILE_ENV: &str = "SNIPZ_FILE";
const EMPTY_LIST: &str = "No snippets yet. Add one with `snipz add`.";
const NO_MATCHES: &str = "No snippets match.";

struct AppContext {
    api: SnipzApi<JsonFileBackend>,
    output: Output<'static>,
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        file,
        theme,
        no_color,
        verbose,
    } = Cli::parse();
    init_logging(verbose);

    let paths = SnipzPaths {
        config_dir: config_dir()?,
    };
    let config = SnipzConfig::load(&paths.config_dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config: {}", e);
        SnipzConfig::default()
    });
    let output = Output::new(theme.unwrap_or(config.theme), no_color);

    // Config must stay usable when the snippet file is broken.
    if let Some(Commands::Config { key, value }) = command {
        return handle_config(&paths, &output, key, value);
    }

    let mut ctx = init_context(file.as_deref(), &config, output)?;

    match command {
        Some(Commands::Add {
            title,
            content,
            editor,
        }) => handle_add(&mut ctx, title, content, editor),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Edit {
            index,
            title,
            content,
        }) => handle_edit(&mut ctx, index, title, content),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Shell) => interactive::run(&mut ctx.api, &ctx.output),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Api("Could not determine config dir".to_string()))
}

/// `--file`, then `$SNIPZ_FILE`, then the configured file, then
/// `snippets.json` in the working directory.
fn resolve_store_file(
    flag: Option<&Path>,
    env_value: Option<PathBuf>,
    config: &SnipzConfig,
) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or(env_value)
        .or_else(|| config.store_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

fn init_context(
    file: Option<&Path>,
    config: &SnipzConfig,
    output: Output<'static>,
) -> Result<AppContext> {
    let env_file = env::var_os(STORE_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let store_file = resolve_store_file(file, env_file, config);
    log::debug!("using store file {}", store_file.display());

    let api = SnipzApi::open(JsonFileBackend::new(store_file))?;
    Ok(AppContext { api, output })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Vec<String>,
    force_editor: bool,
) -> Result<()> {
    let content = content.join(" ");
    let (title, content) = match title {
        Some(title) if !force_editor && !content.trim().is_empty() => (title, content),
        title => {
            let initial = EditorContent::new(title.unwrap_or_default(), content);
            let edited = edit_content(&initial)?;
            (edited.title, edited.content)
        }
    };

    let result = ctx.api.add_snippet(&title, &content)?;
    ctx.output.print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let (result, empty_message) = match search.as_deref() {
        Some(term) => (ctx.api.search_snippets(term)?, NO_MATCHES),
        None => (ctx.api.list_snippets()?, EMPTY_LIST),
    };
    print!(
        "{}",
        ctx.output.snippet_list(&result.listed_snippets, empty_message)
    );
    ctx.output.print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&indexes)?;
    print!("{}", ctx.output.full_snippets(&result.listed_snippets));
    ctx.output.print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let index: DisplayIndex = index.parse()?;
    let current = ctx.api.view_snippets(&[index.to_string()])?;
    let Some(existing) = current.listed_snippets.into_iter().next() else {
        return Ok(());
    };

    let (new_title, new_content) = if title.is_none() && content.is_none() {
        let initial = EditorContent::new(
            existing.snippet.title.clone(),
            existing.snippet.content.clone(),
        );
        let edited = edit_content(&initial)?;
        (edited.title, edited.content)
    } else {
        (
            title.unwrap_or_else(|| existing.snippet.title.clone()),
            content.unwrap_or_else(|| existing.snippet.content.clone()),
        )
    };

    if new_title.trim() == existing.snippet.title
        && new_content.trim() == existing.snippet.content
    {
        println!("No changes.");
        return Ok(());
    }

    let update = SnippetUpdate::new(index, new_title, new_content);
    let result = ctx.api.update_snippet(&update)?;
    ctx.output.print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_snippets(&indexes)?;
    ctx.output.print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    paths: &SnipzPaths,
    output: &Output<'static>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = configure(paths, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in SnipzConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    output.print_messages(&result.messages);
    Ok(())
}
