//! Required header presence.

use samplesheet_model::{REQUIRED_HEADERS, SampleSheet};

use crate::issue::Issue;

/// Check that every required header appears in the header line.
pub fn check(sheet: &SampleSheet) -> Vec<Issue> {
    REQUIRED_HEADERS
        .iter()
        .filter(|header| !sheet.has_header(header))
        .map(|header| Issue::MissingHeader {
            header: (*header).to_string(),
            observed: sheet.headers().to_vec(),
        })
        .collect()
}
