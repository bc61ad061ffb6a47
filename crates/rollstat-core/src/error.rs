//! Error types for kernel invocations.
//!
//! Every failure is detected synchronously: at call entry (range and
//! parameter validation) or deterministically during computation (aliasing
//! violation, sub-computation failure). Nothing is retried, logged, or
//! wrapped; a sub-kernel's error propagates verbatim to the caller.
//!
//! All variants carry allocation-free payloads so the taxonomy is usable
//! without `std`.

use thiserror::Error;

/// Result type alias for kernel operations.
pub type Result<T> = core::result::Result<T, KernelError>;

/// Errors that can occur during a kernel invocation.
///
/// When an error is returned, no output range is reported and the caller
/// must not trust any output array contents.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KernelError {
    /// The requested start index is at or past the end of the input series.
    #[error("start index {start} out of range for series of length {len}")]
    OutOfRangeStartIndex {
        /// Requested start index.
        start: usize,
        /// Input series length.
        len: usize,
    },

    /// The requested end index precedes the start index or exceeds the input.
    #[error("end index {end} out of range (start {start}, series length {len})")]
    OutOfRangeEndIndex {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
        /// Input series length.
        len: usize,
    },

    /// The time period is outside the supported range.
    #[error("invalid period {period} (supported range {min}..={max})")]
    InvalidPeriod {
        /// Requested period.
        period: usize,
        /// Minimum supported period.
        min: usize,
        /// Maximum supported period.
        max: usize,
    },

    /// A deviation multiplier or averaging factor is not a finite number.
    #[error("invalid multiplier '{name}': {value} (must be finite)")]
    InvalidMultiplier {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The aliasing pattern leaves no output array usable as scratch space.
    #[error("scratch buffer would alias the read-only input series")]
    AliasedScratch,

    /// Multi-series inputs have unequal lengths.
    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length (taken from the first series).
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// A caller-allocated output array is shorter than the requested range.
    #[error("output array too small: need {required} slots, got {actual}")]
    OutputTooSmall {
        /// Required number of output slots.
        required: usize,
        /// Provided number of slots.
        actual: usize,
    },

    /// Unreachable condition. Triggering this is always a defect.
    #[error("internal error: {0}")]
    Internal(&'static str),
}
