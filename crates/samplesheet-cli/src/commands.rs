//! Command implementations.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use samplesheet_ingest::read_sample_sheet_path;
use samplesheet_validate::{ValidationReport, validate_sheet};

/// Every check passed.
pub const EXIT_OK: i32 = 0;
/// The file could not be turned into a sample sheet.
pub const EXIT_ERROR: i32 = 1;
/// At least one check failed.
pub const EXIT_INVALID: i32 = 2;

/// Read and validate the sample sheet at `path`.
///
/// # Errors
///
/// Returns an error for structural failures only: a missing or unreadable
/// file, an empty file, or a line with the wrong number of fields. Failed
/// checks are reported through the returned [`ValidationReport`].
pub fn run_validate(path: &Path) -> Result<ValidationReport> {
    let span = info_span!("sample_sheet", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let sheet = read_sample_sheet_path(path)
        .with_context(|| format!("read sample sheet: {}", path.display()))?;
    let report = validate_sheet(&sheet);

    info!(
        rows = sheet.len(),
        passed = report.is_ok(),
        issue_count = report.len(),
        duration_ms = start.elapsed().as_millis(),
        "sample sheet checked"
    );
    Ok(report)
}

/// Process exit code for a finished validation.
pub fn exit_code(report: &ValidationReport) -> i32 {
    if report.is_ok() { EXIT_OK } else { EXIT_INVALID }
}
