//! Index-range validation and the valid output sub-range.

use crate::error::{KernelError, Result};

/// The valid sub-range of output produced by one kernel invocation.
///
/// `beg_idx` is the first input index for which an output was produced; it is
/// always `max(start_idx, lookback)`. Outputs are written into the caller's
/// arrays starting at offset 0, so output slot `i` corresponds to input index
/// `beg_idx + i` for `i < nb_element`.
///
/// An empty range is the `(0, 0)` sentinel: a successful invocation that
/// produced nothing, typically because the lookback adjustment pushed the
/// effective start past `end_idx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRange {
    /// First input index with a valid output.
    pub beg_idx: usize,
    /// Number of valid output elements.
    pub nb_element: usize,
}

impl OutputRange {
    /// The empty sentinel range.
    pub const EMPTY: Self = Self {
        beg_idx: 0,
        nb_element: 0,
    };

    /// Create an output range covering `beg_idx..=end_idx`.
    #[must_use]
    pub fn covering(beg_idx: usize, end_idx: usize) -> Self {
        Self {
            beg_idx,
            nb_element: end_idx - beg_idx + 1,
        }
    }

    /// Returns `true` if no output was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nb_element == 0
    }
}

/// Validate a requested `[start_idx, end_idx]` range against the input length.
///
/// # Errors
///
/// Returns [`KernelError::OutOfRangeStartIndex`] when `start_idx` is at or
/// past the end of the series, and [`KernelError::OutOfRangeEndIndex`] when
/// `end_idx` precedes `start_idx` or exceeds the series.
pub fn validate_range(start_idx: usize, end_idx: usize, len: usize) -> Result<()> {
    if start_idx >= len {
        return Err(KernelError::OutOfRangeStartIndex {
            start: start_idx,
            len,
        });
    }
    if end_idx < start_idx || end_idx >= len {
        return Err(KernelError::OutOfRangeEndIndex {
            start: start_idx,
            end: end_idx,
            len,
        });
    }
    Ok(())
}

/// Check that a caller-allocated output slice can hold `required` elements.
///
/// # Errors
///
/// Returns [`KernelError::OutputTooSmall`] when it cannot.
pub fn validate_output_len(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(KernelError::OutputTooSmall { required, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering() {
        let range = OutputRange::covering(4, 9);
        assert_eq!(range.beg_idx, 4);
        assert_eq!(range.nb_element, 6);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_empty_sentinel() {
        assert_eq!(OutputRange::EMPTY.beg_idx, 0);
        assert_eq!(OutputRange::EMPTY.nb_element, 0);
        assert!(OutputRange::EMPTY.is_empty());
    }

    #[test]
    fn test_validate_range_ok() {
        assert!(validate_range(0, 9, 10).is_ok());
        assert!(validate_range(3, 3, 10).is_ok());
    }

    #[test]
    fn test_validate_range_bad_start() {
        assert_eq!(
            validate_range(10, 12, 10),
            Err(KernelError::OutOfRangeStartIndex { start: 10, len: 10 })
        );
    }

    #[test]
    fn test_validate_range_end_before_start() {
        assert_eq!(
            validate_range(5, 3, 10),
            Err(KernelError::OutOfRangeEndIndex {
                start: 5,
                end: 3,
                len: 10
            })
        );
    }

    #[test]
    fn test_validate_range_end_past_input() {
        assert_eq!(
            validate_range(0, 10, 10),
            Err(KernelError::OutOfRangeEndIndex {
                start: 0,
                end: 10,
                len: 10
            })
        );
    }

    #[test]
    fn test_validate_output_len() {
        assert!(validate_output_len(5, 5).is_ok());
        assert!(validate_output_len(5, 8).is_ok());
        assert_eq!(
            validate_output_len(5, 4),
            Err(KernelError::OutputTooSmall {
                required: 5,
                actual: 4
            })
        );
    }
}
