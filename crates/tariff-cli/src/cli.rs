//! CLI argument definitions for the tariff processor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tariff-processor",
    version,
    about = "HS Tariff Upload Processor - Convert tariff schedule XML to customs upload files",
    long_about = "Convert government tariff-schedule XML feeds (duty rates, nomenclature,\n\
                  explanatory text) into country-specific upload files for the customs\n\
                  master-data system.\n\n\
                  Import runs produce semicolon CSV uploads (ZD14 plus country variants);\n\
                  export runs produce the HS classification spreadsheet."
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
    /// Process an import batch and generate the CSV upload files.
    Import(ImportArgs),

    /// Process an export batch and generate the HS classification workbook.
    ExportHs(ExportHsArgs),

    /// List the supported output formats and their country scope.
    Formats,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Directory containing the uploaded DTR/NOM/TXT XML extracts.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Path to the per-country configuration JSON.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Output directory for generated files (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process for this country instead of the configured one.
    #[arg(long = "country", value_name = "CODE")]
    pub country: Option<String>,

    /// Skip the rate and configuration completeness checks.
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,

    /// Run the pipeline and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ExportHsArgs {
    /// Directory containing the uploaded NOM XML extracts.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Path to the per-country configuration JSON.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Output directory for the workbook (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process for this country instead of the configured one.
    #[arg(long = "country", value_name = "CODE")]
    pub country: Option<String>,
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
