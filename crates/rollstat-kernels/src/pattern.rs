//! Rolling body-average candlestick flag kernel (Doji exemplar).
//!
//! A bar is flagged when its real body (|close − open|) is small relative to
//! a threshold: `body_factor` times the average high-low range of the
//! `avg_period` bars *preceding* it. The running total advances strictly
//! after the current bar's flag is emitted, so the comparison never includes
//! the bar being classified. An `avg_period` of 0 means no averaging at all:
//! each bar is compared against `body_factor` times its own range, and the
//! first output needs no warm-up.

use rollstat_core::{
    lookback,
    num::SampleFloat,
    range::{validate_output_len, validate_range, OutputRange},
    KernelError, Result, WindowAccumulator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flag value emitted when a bar matches the pattern.
pub const PATTERN_MATCH: i32 = 100;

/// Flag value emitted when a bar does not match.
pub const PATTERN_NONE: i32 = 0;

/// Configuration for the Doji flag kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DojiConfig {
    /// Number of preceding bars averaged for the threshold (default: 10).
    /// Zero compares each bar only against itself.
    pub avg_period: usize,
    /// Fraction of the averaged range the body must stay within
    /// (default: 0.1).
    pub body_factor: f64,
}

impl Default for DojiConfig {
    fn default() -> Self {
        Self {
            avg_period: 10,
            body_factor: 0.1,
        }
    }
}

impl DojiConfig {
    /// Create a configuration.
    #[must_use]
    pub fn new(avg_period: usize, body_factor: f64) -> Self {
        Self {
            avg_period,
            body_factor,
        }
    }
}

/// Compute Doji flags over `[start_idx, end_idx]`.
///
/// Emits [`PATTERN_MATCH`] or [`PATTERN_NONE`] per bar into `out`.
///
/// # Errors
///
/// Fails on unequal input lengths, an invalid index range, an `avg_period`
/// above the supported maximum, a non-finite or negative `body_factor`, or a
/// short output slice.
pub fn doji_into<T: SampleFloat>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    start_idx: usize,
    end_idx: usize,
    config: &DojiConfig,
    out: &mut [i32],
) -> Result<OutputRange> {
    let len = open.len();
    for series_len in [high.len(), low.len(), close.len()] {
        if series_len != len {
            return Err(KernelError::LengthMismatch {
                expected: len,
                actual: series_len,
            });
        }
    }
    validate_range(start_idx, end_idx, len)?;
    let lookback = lookback::pattern_lookback(config.avg_period)?;
    if !config.body_factor.is_finite() || config.body_factor < 0.0 {
        return Err(KernelError::InvalidMultiplier {
            name: "body_factor",
            value: config.body_factor,
        });
    }

    let beg_idx = start_idx.max(lookback);
    if beg_idx > end_idx {
        return Ok(OutputRange::EMPTY);
    }
    validate_output_len(end_idx - beg_idx + 1, out.len())?;

    let bar_range = |i: usize| high[i].widen() - low[i].widen();
    let real_body = |i: usize| (close[i].widen() - open[i].widen()).abs();

    if config.avg_period == 0 {
        for (out_idx, i) in (beg_idx..=end_idx).enumerate() {
            out[out_idx] = if real_body(i) <= config.body_factor * bar_range(i) {
                PATTERN_MATCH
            } else {
                PATTERN_NONE
            };
        }
        return Ok(OutputRange::covering(beg_idx, end_idx));
    }

    let mut acc = WindowAccumulator::new(config.avg_period);
    let mut trailing_idx = beg_idx - config.avg_period;
    for i in trailing_idx..beg_idx {
        acc.add(bar_range(i));
    }

    let mut out_idx = 0;
    for i in beg_idx..=end_idx {
        out[out_idx] = if real_body(i) <= config.body_factor * acc.mean() {
            PATTERN_MATCH
        } else {
            PATTERN_NONE
        };
        // Advance only after the flag is emitted: the average covers the
        // preceding window, never the current bar.
        acc.slide(bar_range(i), bar_range(trailing_idx));
        trailing_idx += 1;
        out_idx += 1;
    }

    Ok(OutputRange::covering(beg_idx, end_idx))
}
