//! One parsed data line of a sample sheet.

use serde::Serialize;

use crate::columns::{MAX_FIELDS, MIN_FIELDS};
use crate::error::{Result, RowError};

/// A single sample sheet row.
///
/// The first four fields are always present. The trailing index fields are
/// `None` when the source line ended before reaching them; readers should
/// use the accessor methods, which treat an absent field as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRow {
    pub sample_id: String,
    pub submitter_library_name: String,
    pub index_1_id: String,
    pub index_1_seq: String,
    pub index_2_id: Option<String>,
    pub index_2_seq: Option<String>,
    pub index_id: Option<String>,
    pub index_tag: Option<String>,
}

impl SampleRow {
    /// Build a row from positional tokens in column order.
    ///
    /// # Errors
    ///
    /// Returns [`RowError`] when there are fewer than four or more than
    /// eight tokens.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let found = fields.len();
        if found < MIN_FIELDS {
            return Err(RowError::TooFewFields { found });
        }
        if found > MAX_FIELDS {
            return Err(RowError::TooManyFields { found });
        }
        let required = |idx: usize| fields[idx].as_ref().to_string();
        let optional = |idx: usize| fields.get(idx).map(|value| value.as_ref().to_string());
        Ok(Self {
            sample_id: required(0),
            submitter_library_name: required(1),
            index_1_id: required(2),
            index_1_seq: required(3),
            index_2_id: optional(4),
            index_2_seq: optional(5),
            index_id: optional(6),
            index_tag: optional(7),
        })
    }

    pub fn index_2_id(&self) -> &str {
        self.index_2_id.as_deref().unwrap_or_default()
    }

    pub fn index_2_seq(&self) -> &str {
        self.index_2_seq.as_deref().unwrap_or_default()
    }

    pub fn index_id(&self) -> &str {
        self.index_id.as_deref().unwrap_or_default()
    }

    pub fn index_tag(&self) -> &str {
        self.index_tag.as_deref().unwrap_or_default()
    }

    /// True when the row carries an i5 sequence (dual-index library).
    pub fn is_dual_index(&self) -> bool {
        !self.index_2_seq().is_empty()
    }

    /// The index tag implied by the two sequences: `<i7>-<i5>`.
    pub fn expected_index_tag(&self) -> String {
        format!("{}-{}", self.index_1_seq, self.index_2_seq())
    }
}
