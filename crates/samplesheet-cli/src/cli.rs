//! CLI argument definitions for the sample sheet validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use samplesheet_cli::render::ReportFormat;

#[derive(Parser)]
#[command(
    name = "samplesheet",
    version,
    about = "Validate a sequencing sample sheet CSV",
    long_about = "Validate a sequencing sample sheet CSV before it is used downstream.\n\n\
                  Checks required headers, (Sample ID, library) and (Sample ID, index)\n\
                  uniqueness, and that each Index Tag equals <i7>-<i5>.\n\n\
                  Exit status: 0 when every check passes, 2 when any check fails,\n\
                  1 when the file cannot be read or a line has the wrong field count."
)]
pub struct Cli {
    /// Path to the sample sheet CSV.
    #[arg(value_name = "SAMPLE_SHEET")]
    pub sample_sheet: PathBuf,

    /// How to print validation results.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Table,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Table => ReportFormat::Table,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
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
