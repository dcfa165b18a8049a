//! Types for page windowing.

use thiserror::Error;

/// Errors for page windowing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page index out of range: page {page_index} of size {page_size} over {len} songs")]
    OutOfRange {
        page_index: usize,
        page_size: usize,
        len: usize,
    },
}
