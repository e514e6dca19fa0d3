//! Error types for sample sheet ingestion.

use std::path::PathBuf;

use samplesheet_model::RowError;
use thiserror::Error;

/// Errors that can occur while reading a sample sheet.
///
/// These are structural failures: the input is not a usable sample sheet
/// at all. Data-quality problems are reported by validation instead.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Sample sheet file not found.
    #[error("sample sheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a non-file source, or it was not UTF-8.
    #[error("failed to read sample sheet: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The source contained no header line.
    #[error("sample sheet is empty: no header line")]
    Empty,

    /// The line splitter rejected a line.
    #[error("failed to parse CSV at line {}: {source}", display_line(.line))]
    Csv {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// A data line carried the wrong number of comma-separated tokens.
    #[error("line {line}: {source}")]
    FieldCount {
        line: u64,
        #[source]
        source: RowError,
    },
}

fn display_line(line: &Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |line| line.to_string())
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
