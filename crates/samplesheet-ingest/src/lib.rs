//! Sample sheet ingestion.
//!
//! Turns a header line plus data lines into a [`SampleSheet`]. Ingestion
//! never validates; it only fails when the input cannot be turned into rows
//! at all (missing file, empty source, wrong token count on a line).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use samplesheet_ingest::read_sample_sheet_path;
//!
//! let sheet = read_sample_sheet_path(Path::new("SampleSheet.csv"))?;
//! println!("{} rows", sheet.len());
//! ```
//!
//! [`SampleSheet`]: samplesheet_model::SampleSheet

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Reading ===
pub use reader::{read_sample_sheet, read_sample_sheet_path};
