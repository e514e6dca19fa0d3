//! Index tag consistency: a populated tag must equal `<i7>-<i5>`.

use samplesheet_model::SampleSheet;

use crate::issue::Issue;

/// Check every row with a non-empty index tag against its sequences.
pub fn check(sheet: &SampleSheet) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (idx, row) in sheet.rows().iter().enumerate() {
        let actual = row.index_tag();
        if actual.is_empty() {
            continue;
        }
        let expected = row.expected_index_tag();
        if expected != actual {
            issues.push(Issue::IndexTagMismatch {
                row: SampleSheet::display_row(idx),
                expected,
                actual: actual.to_string(),
            });
        }
    }
    issues
}
