//! Errors raised while resolving pagination parameters.

use thiserror::Error;

use crate::params::{OFFSET_PARAM, SIZE_PARAM};

/// A pagination parameter was present but malformed or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// `page.offset` is not an integer or is negative.
    #[error("incorrect value for parameter page.offset: {value}")]
    InvalidOffset {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// `page.size` is not an integer, is zero, or is below the unbounded sentinel.
    #[error("incorrect value for parameter page.size: {value}")]
    InvalidSize {
        /// Raw value supplied by the caller.
        value: String,
    },
}

impl PaginationError {
    /// Build an [`PaginationError::InvalidOffset`] for the given raw value.
    #[must_use]
    pub fn invalid_offset(value: impl Into<String>) -> Self {
        Self::InvalidOffset {
            value: value.into(),
        }
    }

    /// Build an [`PaginationError::InvalidSize`] for the given raw value.
    #[must_use]
    pub fn invalid_size(value: impl Into<String>) -> Self {
        Self::InvalidSize {
            value: value.into(),
        }
    }

    /// Name of the offending query parameter.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        match self {
            Self::InvalidOffset { .. } => OFFSET_PARAM,
            Self::InvalidSize { .. } => SIZE_PARAM,
        }
    }
}
