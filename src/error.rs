//! Input Contract Errors
//!
//! The scan itself is total once its preconditions hold. These errors are
//! raised before a scan starts, by [`validate`] and `search_checked`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern is longer than text ({pattern_len} > {text_len})")]
    PatternTooLong { pattern_len: usize, text_len: usize },
    #[error("invalid k-mismatches value {k}: must be in 0..{pattern_len}")]
    InvalidMismatches { k: i64, pattern_len: usize },
}

/// Check the search preconditions: `0 < m <= n` and `0 <= k < m`.
///
/// `k` is signed so that a negative threshold coming from user input is
/// reported instead of wrapping.
pub fn validate(pattern_len: usize, text_len: usize, k: i64) -> Result<(), SearchError> {
    if pattern_len == 0 {
        return Err(SearchError::EmptyPattern);
    }
    if pattern_len > text_len {
        return Err(SearchError::PatternTooLong {
            pattern_len,
            text_len,
        });
    }
    if k < 0 || k as u64 >= pattern_len as u64 {
        return Err(SearchError::InvalidMismatches { k, pattern_len });
    }
    Ok(())
}
