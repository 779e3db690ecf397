//! CLI argument definitions for the CSV importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvmap",
    version,
    about = "Map CSV columns onto typed record schemas",
    long_about = "Import CSV documents into typed records.\n\n\
                  A JSON schema description declares the target fields (int, float,\n\
                  bool, text, enum, reference) and one level of nested list fields.\n\
                  Mapping configurations bind each field to a CSV column and can be\n\
                  saved and restored as JSON snapshots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// List the column set of a CSV file.
    Columns(ColumnsArgs),

    /// Create a default mapping configuration for a schema against a CSV file.
    Init(InitArgs),

    /// Import CSV rows into typed records.
    Import(ImportArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Path to the CSV file whose columns seed the default bindings.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Path to the JSON schema description of the target record type.
    #[arg(long = "schema", value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,

    /// Write the mapping configuration here instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Path to the JSON schema description of the target record type.
    #[arg(long = "schema", value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,

    /// Mapping configuration snapshot to apply (default bindings when omitted).
    #[arg(long = "config", value_name = "CONFIG_JSON")]
    pub config: Option<PathBuf>,

    /// Write the imported records here instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
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
