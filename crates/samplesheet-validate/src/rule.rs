//! Validation rule identifiers.

use serde::{Deserialize, Serialize};

/// One of the sample sheet checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// All required headers are present in the header line.
    RequiredHeaders,
    /// (Sample ID, Submitter Library Name) is unique across all rows.
    SampleLibraryUnique,
    /// (Sample ID, Index 1 sequence) is unique across single-index rows.
    SampleIndex1SeqUnique,
    /// (Sample ID, Index Tag) is unique across dual-index rows.
    SampleIndexTagUnique,
    /// A populated Index Tag equals `<i7>-<i5>`.
    IndexTagConsistency,
}

impl Rule {
    /// Every rule in the order the validator runs them.
    pub const ALL: [Rule; 5] = [
        Rule::RequiredHeaders,
        Rule::SampleLibraryUnique,
        Rule::SampleIndex1SeqUnique,
        Rule::SampleIndexTagUnique,
        Rule::IndexTagConsistency,
    ];

    /// Stable short code.
    pub fn code(self) -> &'static str {
        match self {
            Self::RequiredHeaders => "SS001",
            Self::SampleLibraryUnique => "SS002",
            Self::SampleIndex1SeqUnique => "SS003",
            Self::SampleIndexTagUnique => "SS004",
            Self::IndexTagConsistency => "SS005",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::RequiredHeaders => "Required headers",
            Self::SampleLibraryUnique => "Sample + library unique",
            Self::SampleIndex1SeqUnique => "Sample + index 1 sequence unique",
            Self::SampleIndexTagUnique => "Sample + index tag unique",
            Self::IndexTagConsistency => "Index tag consistency",
        }
    }

}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A composite key that must not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueKey {
    /// (Sample ID, Submitter Library Name) over all rows.
    SampleLibrary,
    /// (Sample ID, Index 1 sequence) over single-index rows.
    SampleIndex1Seq,
    /// (Sample ID, Index Tag) over dual-index rows.
    SampleIndexTag,
}

impl UniqueKey {
    /// Rule that enforces this key.
    pub fn rule(self) -> Rule {
        match self {
            Self::SampleLibrary => Rule::SampleLibraryUnique,
            Self::SampleIndex1Seq => Rule::SampleIndex1SeqUnique,
            Self::SampleIndexTag => Rule::SampleIndexTagUnique,
        }
    }

    /// Column names forming the key.
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            Self::SampleLibrary => ("Sample ID", "Submitter Library Name"),
            Self::SampleIndex1Seq => ("Sample ID", "Index 1 Sequence"),
            Self::SampleIndexTag => ("Sample ID", "Index Tag"),
        }
    }
}
