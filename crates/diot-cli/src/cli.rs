//! CLI argument definitions for the DIOT converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "diot",
    version,
    about = "DIOT converter - turn tax-metadata exports into DIOT reports",
    long_about = "Convert a tilde-delimited tax-metadata export into a DIOT report.\n\n\
                  Writes a headerless pipe-delimited .txt file for submission and a\n\
                  comma-delimited .csv file with a header row for review."
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

    /// Include row values in trace logs.
    ///
    /// Rows hold taxpayer data, so values are replaced by a placeholder
    /// unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a metadata export into the .txt and .csv reports.
    Convert(ConvertArgs),

    /// List the report columns and how each one is produced.
    Schema(SchemaArgs),

    /// Print the built-in filing profile as TOML.
    Profile,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Tilde-delimited metadata export (.txt).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Folder for the report files (default: the input's folder).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report file name; `.txt` is appended when missing
    /// (default: <INPUT stem>_converted.txt).
    #[arg(long = "output-name", value_name = "NAME")]
    pub output_name: Option<String>,

    /// Filing profile (TOML) replacing the built-in DIOT layout.
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Read and derive every row without writing the report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Filing profile (TOML) to describe instead of the built-in one.
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,
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
