//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod init;
pub mod interactive;
pub mod query;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// moodle-launcher - Moodle upcoming events and courses at your launcher
#[derive(Parser, Debug)]
#[command(name = "moodle-launcher")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "MOODLE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MOODLE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the Moodle site URL
    #[arg(long, global = true, env = "MOODLE_SITE", hide_env = true)]
    pub site: Option<String>,

    /// Override the web service token
    #[arg(
        long,
        global = true,
        env = "MOODLE_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MOODLE_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the site
    #[arg(long, global = true, env = "MOODLE_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Run one launcher query: `<keyword> [argument...]`
    #[command(after_help = "\
Examples:
  moodle-launcher query moodle              top-level menu
  moodle-launcher query moodle events quiz  upcoming events matching 'quiz'
  moodle-launcher query mc algebra          courses via the shortcut keyword")]
    Query {
        /// Keyword followed by the text typed after it
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// List upcoming events
    Events {
        /// Only show events whose name contains every word
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// List enrolled courses
    Courses {
        /// Only show courses whose name contains every word
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Prompt for queries and act on the selected result, like a launcher would
    Interactive,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
