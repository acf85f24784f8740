//! This file defines the command-line interface (CLI) for the profanity application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use profanity_core::FilterTarget;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "profanity",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find and replace profanity in text",
    long_about = "profanity scans text against curated, multi-language word lists and rewrites every match with the replacement strategy of your choice, reporting which word list changed the text at each step.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `profanity` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filters an input file or stdin, replacing profane words.
    #[command(about = "Filters an input file or stdin, replacing profane words.")]
    Filter(FilterCommand),

    /// Reads JSON filter requests line by line and answers each with a JSON response.
    #[command(about = "Reads JSON filter requests from stdin, one per line, and writes one JSON response per line.")]
    Live(LiveCommand),

    /// Lists the available replacement strategies.
    #[command(about = "Lists the available replacement strategies.")]
    Strategies {
        #[arg(long, help = "Print the strategies as JSON.")]
        json: bool,
    },

    /// Lists the available filter targets.
    #[command(about = "Lists the available filter targets.")]
    Targets {
        #[arg(long, help = "Print the targets as JSON.")]
        json: bool,
    },

    /// Lists the built-in word lists, or the words of one list.
    #[command(about = "Lists the built-in word lists, or the words of a single list.")]
    Lists(ListsCommand),
}

/// Settings shared by every command that runs the filter.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Path to a filter configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a filter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Directory of built-in `*.txt` word lists.
    #[arg(long = "word-list-dir", value_name = "DIR", env = "PROFANITY_WORD_LISTS_DIR", help = "Directory containing the built-in *.txt word lists.")]
    pub word_list_dir: Option<PathBuf>,

    /// Extra words to filter (comma-separated).
    #[arg(long = "words", short = 'w', value_delimiter = ',', help = "Extra words to filter for this run (comma-separated).")]
    pub words: Vec<String>,

    /// URLs of newline-delimited word lists to fetch for this run.
    #[arg(long = "word-list-url", value_name = "URL", help = "Fetch an extra newline-delimited word list from a URL (repeatable).")]
    pub word_list_urls: Vec<String>,

    /// Escape mask characters for markdown targets.
    #[arg(long = "markdown-safe", help = "Escape mask characters (e.g. \\*) when the target is a body or comment.")]
    pub markdown_safe: bool,
}

/// Arguments for the `filter` command.
#[derive(Args, Debug)]
pub struct FilterCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write filtered output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Replacement strategy. Unknown names fall back to asterisk.
    #[arg(long, short = 's', value_name = "STRATEGY", help = "Replacement strategy (see `profanity strategies`). Unknown names fall back to asterisk.")]
    pub strategy: Option<String>,

    /// Where the output will be used.
    #[arg(long, short = 't', value_name = "TARGET", help = "Where the output will be used: title, body or comment.")]
    pub target: Option<FilterTarget>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Print a JSON response instead of the filtered text.
    #[arg(long, help = "Print the full filter response as JSON.")]
    pub json: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the step summary.
    #[arg(long = "no-summary", help = "Suppress the summary of filter steps.")]
    pub no_summary: bool,

    /// Exit with code 2 when profanity was found.
    #[arg(long = "fail-on-match", help = "Exit with code 2 if any profanity was found.")]
    pub fail_on_match: bool,
}

/// Arguments for the `live` command.
#[derive(Args, Debug)]
pub struct LiveCommand {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the `lists` command.
#[derive(Args, Debug)]
pub struct ListsCommand {
    /// Name of a word list to print.
    #[arg(value_name = "NAME", help = "Print the words of this list instead of the list names.")]
    pub name: Option<String>,

    /// Directory of built-in `*.txt` word lists.
    #[arg(long = "word-list-dir", value_name = "DIR", env = "PROFANITY_WORD_LISTS_DIR", help = "Directory containing the built-in *.txt word lists.")]
    pub word_list_dir: Option<PathBuf>,

    #[arg(long, help = "Print as JSON.")]
    pub json: bool,
}
