//! Column catalog for sample sheet CSV files.

/// Column headers in positional order. Data lines map onto these by index.
pub const COLUMNS: [&str; 8] = [
    "Sample ID",
    "Submitter Library Name",
    "Index 1 ID",
    "Index 1 (i7) Sequence in 5' to 3' orientation",
    "Index 2 ID",
    "Index 2 (i5) Sequence in 5' to 3' orientation",
    "Index ID",
    "Index Tag",
];

/// Headers that must appear in the header line (exact, case-sensitive match).
pub const REQUIRED_HEADERS: [&str; 4] = [
    "Sample ID",
    "Submitter Library Name",
    "Index 1 ID",
    "Index 1 (i7) Sequence in 5' to 3' orientation",
];

/// Minimum number of tokens a data line must carry.
pub const MIN_FIELDS: usize = REQUIRED_HEADERS.len();

/// Maximum number of tokens a data line may carry.
pub const MAX_FIELDS: usize = COLUMNS.len();
