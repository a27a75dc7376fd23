//! CLI argument definitions for the routine converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvtojson",
    version,
    about = "Convert flat skincare routine CSV into nested routine JSON",
    long_about = "Convert a flat CSV (one row per person per data source) into a JSON \
                  document with one routine per person.\n\n\
                  Each routine lists its distinct source links, its distinct ingredient \
                  flags, and ordered Morning and Evening product steps."
)]
pub struct Cli {
    /// CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file to write (replaced if it exists).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Drop empty ingredient names instead of keeping them as "".
    ///
    /// By default an empty ingredient cell becomes `[""]`, matching the
    /// historical output. With this flag it becomes `[]`, and empty pieces
    /// such as the middle of "Water,,Oil" are removed.
    #[arg(long = "drop-empty-ingredients")]
    pub drop_empty_ingredients: bool,

    /// Read and aggregate, but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not print the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include person identifiers in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,

    /// Prefix each log event with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module path in log events.
    #[arg(long = "log-target")]
    pub log_target: bool,
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
