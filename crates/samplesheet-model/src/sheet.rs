//! Sheet container: header tokens plus rows in file order.

use serde::Serialize;

use crate::row::SampleRow;

/// Lines before the first data row (the header) plus the shift to 1-based numbering.
const DISPLAY_ROW_OFFSET: usize = 2;

/// A parsed sample sheet.
///
/// Populated once at construction and read-only afterwards. Row order
/// matches the source file so row numbers in diagnostics line up with
/// what a user sees in a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleSheet {
    headers: Vec<String>,
    rows: Vec<SampleRow>,
}

impl SampleSheet {
    pub fn new(headers: Vec<String>, rows: Vec<SampleRow>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact, case-sensitive header lookup.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// Spreadsheet row number for the row at `index` (header is row 1).
    pub fn display_row(index: usize) -> usize {
        index + DISPLAY_ROW_OFFSET
    }
}
