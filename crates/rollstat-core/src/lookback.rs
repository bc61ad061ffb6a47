//! Lookback resolution for window configurations.
//!
//! The lookback of an indicator is the number of leading input samples that
//! cannot produce an output because the window is not yet full. Composite
//! indicators take the lookback of their dominant sub-indicator, never a sum
//! of sub-lookbacks: both sub-computations run over the same aligned window.

use crate::error::{KernelError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum supported time period.
pub const MIN_PERIOD: usize = 2;

/// Maximum supported time period.
pub const MAX_PERIOD: usize = 100_000;

/// Moving-average method used as a sub-indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaMethod {
    /// Simple moving average.
    #[default]
    Sma,
    /// Exponential moving average, seeded from the SMA of its first window.
    Ema,
}

/// Validate a time period against the supported range.
///
/// # Errors
///
/// Returns [`KernelError::InvalidPeriod`] outside `[MIN_PERIOD, MAX_PERIOD]`.
pub fn validate_period(period: usize) -> Result<()> {
    if !(MIN_PERIOD..=MAX_PERIOD).contains(&period) {
        return Err(KernelError::InvalidPeriod {
            period,
            min: MIN_PERIOD,
            max: MAX_PERIOD,
        });
    }
    Ok(())
}

/// Lookback of the simple moving average.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn sma_lookback(period: usize) -> Result<usize> {
    validate_period(period)?;
    Ok(period - 1)
}

/// Lookback of the exponential moving average.
///
/// The unstable period is fixed at zero, so this matches the SMA lookback.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn ema_lookback(period: usize) -> Result<usize> {
    validate_period(period)?;
    Ok(period - 1)
}

/// Lookback of a moving average selected by method.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn ma_lookback(period: usize, method: MaMethod) -> Result<usize> {
    match method {
        MaMethod::Sma => sma_lookback(period),
        MaMethod::Ema => ema_lookback(period),
    }
}

/// Lookback of the rolling population variance.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn var_lookback(period: usize) -> Result<usize> {
    validate_period(period)?;
    Ok(period - 1)
}

/// Lookback of the rolling standard deviation.
///
/// Driven entirely by the variance sub-computation.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn stddev_lookback(period: usize) -> Result<usize> {
    var_lookback(period)
}

/// Lookback of Bollinger Bands.
///
/// Driven by the middle-band moving average, the dominant sub-indicator: the
/// deviation series is aligned to the same window and adds no extra history.
///
/// # Errors
///
/// Fails when the period is outside the supported range.
pub fn bbands_lookback(period: usize, method: MaMethod) -> Result<usize> {
    ma_lookback(period, method)
}

/// Lookback of a rolling-average pattern kernel.
///
/// An `avg_period` of 0 is legal: each bar is compared only against itself,
/// so the first output needs no warm-up.
///
/// # Errors
///
/// Fails when `avg_period` exceeds the maximum supported period.
pub fn pattern_lookback(avg_period: usize) -> Result<usize> {
    if avg_period > MAX_PERIOD {
        return Err(KernelError::InvalidPeriod {
            period: avg_period,
            min: 0,
            max: MAX_PERIOD,
        });
    }
    Ok(avg_period)
}
