//! Validation issue types.
//!
//! Each variant carries only the data its rule produces. Rendering to text
//! happens through [`Issue::message`] and [`Issue::lines`], so front ends can
//! assert on structure instead of parsing console output.

use serde::{Deserialize, Serialize};

use crate::rule::{Rule, UniqueKey};

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A required header is absent from the header line.
    MissingHeader {
        header: String,
        observed: Vec<String>,
    },
    /// A composite key occurs more than once.
    DuplicateKey {
        unique: UniqueKey,
        key: (String, String),
        count: usize,
    },
    /// The stored index tag differs from `<i7>-<i5>`.
    IndexTagMismatch {
        row: usize,
        expected: String,
        actual: String,
    },
}

impl Issue {
    /// Rule that produced this issue.
    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingHeader { .. } => Rule::RequiredHeaders,
            Issue::DuplicateKey { unique, .. } => unique.rule(),
            Issue::IndexTagMismatch { .. } => Rule::IndexTagConsistency,
        }
    }

    /// Spreadsheet row number, for row-level issues.
    pub fn row(&self) -> Option<usize> {
        match self {
            Issue::IndexTagMismatch { row, .. } => Some(*row),
            Issue::MissingHeader { .. } | Issue::DuplicateKey { .. } => None,
        }
    }

    /// Single-line description.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingHeader { header, observed } => {
                format!(
                    "Missing required header: {header} (found: {})",
                    observed.join(", ")
                )
            }
            Issue::DuplicateKey { unique, key, count } => duplicate_line(*unique, key, *count),
            Issue::IndexTagMismatch {
                row,
                expected,
                actual,
            } => format!(
                "Expected and actual index tags do not match on row {row}: \
                 expected {expected}, found {actual}"
            ),
        }
    }

    /// Console rendering, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Issue::MissingHeader { header, observed } => vec![
                format!("Missing required header: {header}"),
                format!("{observed:?}"),
            ],
            Issue::DuplicateKey { unique, key, count } => vec![duplicate_line(*unique, key, *count)],
            Issue::IndexTagMismatch {
                row,
                expected,
                actual,
            } => vec![
                format!("Expected and actual index tags do not match on row {row}"),
                format!("Expected: {expected}"),
                format!("Actual  : {actual}"),
            ],
        }
    }
}

fn duplicate_line(unique: UniqueKey, key: &(String, String), count: usize) -> String {
    let (first, second) = unique.columns();
    format!("'{first}' and '{second}' not unique: {key:?} ({count} occurrences)")
}
