//! Clap argument definitions for the `klev` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "klev")]
#[command(about = "Multilingual search over fishing reports and competitions")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Corpus selection shared by searching commands.
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// JSON corpus file, overriding [corpus] path (can be given multiple times)
    #[arg(short = 'c', long = "corpus")]
    pub paths: Vec<PathBuf>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Shared explain flag.
#[derive(Args, Debug, Clone, Default)]
pub struct ExplainArgs {
    /// Show how the query was processed
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `klev search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Results per document kind [default: 5]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Abort the search after this many milliseconds (0 disables)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[command(flatten)]
    /// Corpus overrides.
    pub corpus: CorpusArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    #[command(flatten)]
    /// Explain flags.
    pub explain: ExplainArgs,
}

/// Arguments for `klev expand`.
#[derive(Args, Debug, Clone)]
pub struct ExpandCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum variants to generate [default: 256]
    #[arg(long)]
    pub max_variants: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    #[command(flatten)]
    /// Explain flags.
    pub explain: ExplainArgs,
}

/// Arguments for `klev keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `klev ask`.
#[derive(Args, Debug, Clone)]
pub struct AskCommand {
    /// Chat message, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    #[command(flatten)]
    /// Corpus overrides.
    pub corpus: CorpusArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `klev init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.klev.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `klev` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search reports and competitions
    #[command(after_help = "\
Queries may mix Russian, Romanian and transliterated words. Dates such as
'18 января' or '18.01.2026' also match numeric dates in titles. When the query
finds nothing, its translated and transliterated variants are tried in order.

EXAMPLES:
  klev search Отчет о Днестре
  klev search 'соревнования в Данченах'
  klev search 18 января --explain
  klev search Ţipala --json")]
    Search(SearchCommand),

    /// Show the query variants used as a search fallback
    Expand(ExpandCommand),

    /// Show the keywords a query reduces to
    Keywords(KeywordsCommand),

    /// Answer a chat message: small talk gets a canned reply, anything else is searched
    Ask(AskCommand),

    /// Initialize klev configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

/// Joins positional words into one query string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
