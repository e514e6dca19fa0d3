//! Composite key uniqueness.
//!
//! Single-index rows (no i5 sequence) are keyed on the i7 sequence;
//! dual-index rows are keyed on the combined index tag.

use samplesheet_model::SampleSheet;

use crate::duplicates::find_duplicates;
use crate::issue::Issue;
use crate::rule::UniqueKey;

/// (Sample ID, Submitter Library Name) across all rows.
pub fn check_sample_library(sheet: &SampleSheet) -> Vec<Issue> {
    let keys = sheet
        .rows()
        .iter()
        .map(|row| (row.sample_id.as_str(), row.submitter_library_name.as_str()));
    duplicate_issues(UniqueKey::SampleLibrary, keys)
}

/// (Sample ID, Index 1 sequence) across single-index rows.
pub fn check_sample_index1_seq(sheet: &SampleSheet) -> Vec<Issue> {
    let keys = sheet
        .rows()
        .iter()
        .filter(|row| !row.is_dual_index())
        .map(|row| (row.sample_id.as_str(), row.index_1_seq.as_str()));
    duplicate_issues(UniqueKey::SampleIndex1Seq, keys)
}

/// (Sample ID, Index Tag) across dual-index rows.
pub fn check_sample_index_tag(sheet: &SampleSheet) -> Vec<Issue> {
    let keys = sheet
        .rows()
        .iter()
        .filter(|row| row.is_dual_index())
        .map(|row| (row.sample_id.as_str(), row.index_tag()));
    duplicate_issues(UniqueKey::SampleIndexTag, keys)
}

fn duplicate_issues<'a>(unique: UniqueKey, keys: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<Issue> {
    find_duplicates(keys)
        .into_iter()
        .map(|((first, second), count)| Issue::DuplicateKey {
            unique,
            key: (first.to_string(), second.to_string()),
            count,
        })
        .collect()
}
