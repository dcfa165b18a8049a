//! Types for catalog queries.

use thiserror::Error;

use crate::pagination::PageError;
use crate::source::SourceError;

/// Errors for query service operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The cursor does not fit the result set. Call `previous_page` and retry.
    #[error(transparent)]
    OutOfRange(#[from] PageError),

    /// A release-year filter matched nothing. Raised before windowing.
    #[error("No songs found since {since}")]
    NoSongsFound { since: String },

    /// The record source could not be loaded at construction.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl QueryError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoSongsFound { .. })
    }
}
