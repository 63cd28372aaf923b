//! CLI argument definitions for colseek.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colseek",
    version,
    about = "Search large delimited files column by column, one chunk at a time",
    long_about = "Scan CSV-style files in fixed-size chunks of rows.\n\n\
                  Every row is validated against the column count of the first\n\
                  row, and a configurable terminator string is stripped from\n\
                  the end of each row before matching."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find rows whose column equals a key.
    Search(SearchArgs),

    /// Print a file's rows as a table.
    Dump(DumpArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Path to the delimited file to scan.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based index of the column to match against.
    #[arg(value_name = "COLUMN")]
    pub column: usize,

    /// Value the column must equal.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Collect every matching row instead of stopping at the first.
    #[arg(long = "all")]
    pub all: bool,

    /// Stop after this many matches (implies --all).
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Number of rows held in memory per chunk.
    #[arg(long = "chunk-size", value_name = "N", default_value_t = 200)]
    pub chunk_size: usize,

    /// Treat the first row as a header and exclude it from the search.
    #[arg(long = "header")]
    pub header: bool,

    /// Print matches as JSON arrays instead of delimited text.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Parser)]
pub struct DumpArgs {
    /// Path to the delimited file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print at most this many data rows.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Treat the first row as a header and use it for column labels.
    #[arg(long = "header")]
    pub header: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// File-format flags shared by the subcommands.
#[derive(Parser)]
pub struct FormatArgs {
    /// Field separator character.
    #[arg(long = "separator", value_name = "CHAR", default_value = ",")]
    pub separator: char,

    /// Field enclosure character.
    #[arg(long = "quote", value_name = "CHAR", default_value = "\"")]
    pub quote: char,

    /// Escape character inside enclosed fields.
    #[arg(long = "escape", value_name = "CHAR", default_value = "\\")]
    pub escape: char,

    /// Disable the escape character entirely.
    #[arg(long = "no-escape")]
    pub no_escape: bool,

    /// Terminator string stripped from the end of each row.
    #[arg(long = "terminator", value_name = "STR", default_value = "")]
    pub terminator: String,

    /// Buffer capacity hint; set above the longest line in the file.
    #[arg(long = "max-line-length", value_name = "BYTES")]
    pub max_line_length: Option<usize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
