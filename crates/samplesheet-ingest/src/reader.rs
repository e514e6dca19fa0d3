//! Sample sheet reading.
//!
//! Each physical line is trimmed of surrounding whitespace and then split on
//! every comma: there is no quoting or escaping, so a value that itself
//! contains a comma spills into the next column. Tokens inside the line keep
//! their own whitespace. Every line after the header is one row, so a blank
//! line is a row with a single empty token and fails the field count.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use samplesheet_model::{SampleRow, SampleSheet};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads a sample sheet from any byte source.
///
/// The first line is the header; every following line becomes one
/// [`SampleRow`] in file order.
///
/// # Errors
///
/// Returns [`IngestError::Read`] when the source is unreadable or not UTF-8,
/// [`IngestError::Empty`] when there is no header line, and
/// [`IngestError::FieldCount`] when a data line has the wrong number of
/// tokens.
pub fn read_sample_sheet<R: Read>(mut source: R) -> Result<SampleSheet> {
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .map_err(|source| IngestError::Read { source })?;
    parse_sample_sheet(&text)
}

/// Reads a sample sheet from a file path.
///
/// The path is resolved to an absolute path before opening.
pub fn read_sample_sheet_path(path: &Path) -> Result<SampleSheet> {
    let resolved = path.canonicalize().map_err(|e| open_error(path, e))?;
    debug!(path = %resolved.display(), "reading sample sheet");
    let text = fs::read_to_string(&resolved).map_err(|e| open_error(&resolved, e))?;
    parse_sample_sheet(&text)
}

fn parse_sample_sheet(text: &str) -> Result<SampleSheet> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let splitter = line_splitter();
    let mut lines = text.lines().zip(1u64..);

    let Some((header_line, header_number)) = lines.next() else {
        return Err(IngestError::Empty);
    };
    let headers = split_line(&splitter, header_line, header_number)?;

    let mut rows = Vec::new();
    for (line, number) in lines {
        let fields = split_line(&splitter, line, number)?;
        let row = SampleRow::from_fields(fields.as_slice())
            .map_err(|source| IngestError::FieldCount { line: number, source })?;
        rows.push(row);
    }

    debug!(
        header_count = headers.len(),
        row_count = rows.len(),
        "sample sheet parsed"
    );
    Ok(SampleSheet::new(headers, rows))
}

fn line_splitter() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false);
    builder
}

/// Trims the line, then splits it on commas. An empty line is one empty token.
fn split_line(splitter: &ReaderBuilder, line: &str, number: u64) -> Result<Vec<String>> {
    let mut record = StringRecord::new();
    let found = splitter
        .from_reader(line.trim().as_bytes())
        .read_record(&mut record)
        .map_err(|source| IngestError::Csv {
            line: Some(number),
            source,
        })?;
    if !found {
        return Ok(vec![String::new()]);
    }
    Ok(record.iter().map(str::to_string).collect())
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
