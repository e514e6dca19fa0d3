use thiserror::Error;

use crate::columns::{MAX_FIELDS, MIN_FIELDS};

/// Errors raised while building a [`crate::SampleRow`] from tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected at least {min} fields, found {found}", min = MIN_FIELDS)]
    TooFewFields { found: usize },
    #[error("expected at most {max} fields, found {found}", max = MAX_FIELDS)]
    TooManyFields { found: usize },
}

impl RowError {
    /// Number of tokens the offending line carried.
    pub fn found(&self) -> usize {
        match self {
            Self::TooFewFields { found } | Self::TooManyFields { found } => *found,
        }
    }
}

pub type Result<T> = std::result::Result<T, RowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RowError::TooFewFields { found: 2 };
        assert_eq!(err.to_string(), "expected at least 4 fields, found 2");
        let err = RowError::TooManyFields { found: 9 };
        assert_eq!(err.to_string(), "expected at most 8 fields, found 9");
        assert_eq!(err.found(), 9);
    }
}
