use clap::{Parser, Subcommand};
use snipz::config::ThemeMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(about = "Keep, find and edit short text snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snippet file to use (defaults to $SNIPZ_FILE, then the configured file, then ./snippets.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Color theme for this run
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a snippet (opens $EDITOR when no content is given)
    #[command(alias = "n")]
    Add {
        /// Title of the snippet
        title: Option<String>,

        /// Content words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        content: Vec<String>,

        /// Always open the editor, prefilled with any title/content given
        #[arg(short, long)]
        editor: bool,
    },

    /// List snippets
    #[command(alias = "ls")]
    List {
        /// Only show snippets whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search snippet titles (case-insensitive)
    #[command(alias = "s")]
    Search { term: String },

    /// Show one or more snippets in full
    #[command(alias = "v")]
    View {
        /// Indexes of the snippets (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Edit a snippet (opens $EDITOR unless --title or --content is given)
    #[command(alias = "e")]
    Edit {
        /// Index of the snippet
        index: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the snippets (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (store-file, theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session: select, edit, save and delete snippets
    Shell,
}
