//! Rolling variance and standard deviation kernels.
//!
//! Two derivation paths, both O(1) per step:
//!
//! - fresh: the accumulator tracks sum and sum of squares and the variance
//!   falls out of `E[x²] − (E[x])²` at every step;
//! - precomputed-mean reuse: when the caller already holds an aligned simple
//!   moving average, only the sum of squares is consumed and the deviation is
//!   derived against the supplied mean.
//!
//! Any variance that cancellation pushes to or below zero yields a deviation
//! of exactly 0.0, never a NaN.

use rollstat_core::{
    lookback,
    num::SampleFloat,
    range::{validate_output_len, validate_range, OutputRange},
    KernelError, Result, WindowAccumulator,
};

/// Compute the rolling population variance over `[start_idx, end_idx]`.
///
/// # Errors
///
/// Fails on an invalid index range, an unsupported period, or an output
/// slice shorter than the effective range.
pub fn var_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    period: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_range(start_idx, end_idx, input.len())?;
    let lookback = lookback::var_lookback(period)?;

    let beg_idx = start_idx.max(lookback);
    if beg_idx > end_idx {
        return Ok(OutputRange::EMPTY);
    }
    validate_output_len(end_idx - beg_idx + 1, out.len())?;

    let mut acc = WindowAccumulator::new(period);
    let mut trailing_idx = beg_idx - lookback;
    for sample in &input[trailing_idx..beg_idx] {
        acc.add(sample.widen());
    }

    let mut out_idx = 0;
    for i in beg_idx..=end_idx {
        acc.add(input[i].widen());
        out[out_idx] = T::narrow(acc.variance());
        acc.remove(input[trailing_idx].widen());
        trailing_idx += 1;
        out_idx += 1;
    }

    Ok(OutputRange::covering(beg_idx, end_idx))
}

/// Compute the rolling standard deviation, scaled by `nb_dev`.
///
/// Variance, clamped square root, and scaling all happen in `f64` within one
/// fused pass; the output slot is narrowed exactly once. The multiplication
/// is skipped when `nb_dev == 1.0`.
///
/// # Errors
///
/// Fails when `nb_dev` is not finite, plus everything [`var_into`] rejects.
pub fn stddev_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    period: usize,
    nb_dev: f64,
    out: &mut [T],
) -> Result<OutputRange> {
    if !nb_dev.is_finite() {
        return Err(KernelError::InvalidMultiplier {
            name: "nb_dev",
            value: nb_dev,
        });
    }
    validate_range(start_idx, end_idx, input.len())?;
    let lookback = lookback::stddev_lookback(period)?;

    let beg_idx = start_idx.max(lookback);
    if beg_idx > end_idx {
        return Ok(OutputRange::EMPTY);
    }
    validate_output_len(end_idx - beg_idx + 1, out.len())?;

    let mut acc = WindowAccumulator::new(period);
    let mut trailing_idx = beg_idx - lookback;
    for sample in &input[trailing_idx..beg_idx] {
        acc.add(sample.widen());
    }

    let mut out_idx = 0;
    for i in beg_idx..=end_idx {
        acc.add(input[i].widen());
        let dev = acc.variance().sqrt();
        out[out_idx] = T::narrow(if nb_dev == 1.0 { dev } else { dev * nb_dev });
        acc.remove(input[trailing_idx].widen());
        trailing_idx += 1;
        out_idx += 1;
    }

    Ok(OutputRange::covering(beg_idx, end_idx))
}

/// Derive the standard deviation from a precomputed simple moving average.
///
/// `ma` holds `ma_range.nb_element` mean values aligned to `input` at
/// `ma_range.beg_idx`, exactly as returned by the SMA kernel over the same
/// window. Only the sum of squares is maintained here; the mean has already
/// been paid for by the caller. Deviations are written to `out` with the
/// same alignment.
///
/// # Errors
///
/// Fails on an unsupported period, a mean series shorter than the range, an
/// input too short to cover the aligned windows, or a short output slice.
pub fn stddev_from_precalc_ma<T: SampleFloat>(
    input: &[T],
    ma: &[T],
    ma_range: OutputRange,
    period: usize,
    out: &mut [T],
) -> Result<()> {
    lookback::validate_period(period)?;
    if ma_range.is_empty() {
        return Ok(());
    }
    if ma_range.beg_idx + 1 < period {
        return Err(KernelError::Internal("mean series not aligned to its window"));
    }
    if ma.len() < ma_range.nb_element {
        return Err(KernelError::LengthMismatch {
            expected: ma_range.nb_element,
            actual: ma.len(),
        });
    }
    let last_idx = ma_range.beg_idx + ma_range.nb_element - 1;
    if last_idx >= input.len() {
        return Err(KernelError::LengthMismatch {
            expected: last_idx + 1,
            actual: input.len(),
        });
    }
    validate_output_len(ma_range.nb_element, out.len())?;

    let mut acc = WindowAccumulator::new(period);
    let mut start_sum = ma_range.beg_idx + 1 - period;
    let mut end_sum = ma_range.beg_idx;
    for sample in &input[start_sum..end_sum] {
        acc.add(sample.widen());
    }

    for out_idx in 0..ma_range.nb_element {
        acc.add(input[end_sum].widen());
        let variance = acc.variance_about(ma[out_idx].widen());
        out[out_idx] = if variance > 0.0 {
            T::narrow(variance.sqrt())
        } else {
            T::narrow(0.0)
        };
        acc.remove(input[start_sum].widen());
        start_sum += 1;
        end_sum += 1;
    }

    Ok(())
}
