//! Moving-average kernels.
//!
//! The SMA is the canonical sliding-sum kernel: prime the accumulator with
//! the `period - 1` samples before the first output, then add one sample and
//! drop the trailing one per step. The EMA seeds from the SMA of its first
//! window and applies the usual `α = 2 / (period + 1)` recurrence.

use rollstat_core::{
    lookback,
    num::SampleFloat,
    range::{validate_output_len, validate_range, OutputRange},
    MaMethod, Result, WindowAccumulator,
};

/// Compute a simple moving average over `[start_idx, end_idx]`.
///
/// Outputs are written into `out` starting at offset 0; the returned range
/// maps output slots back to input indices.
///
/// # Errors
///
/// Fails on an invalid index range, an unsupported period, or an output
/// slice shorter than the effective range.
pub fn sma_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    period: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_range(start_idx, end_idx, input.len())?;
    let lookback = lookback::sma_lookback(period)?;

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
        out[out_idx] = T::narrow(acc.mean());
        acc.remove(input[trailing_idx].widen());
        trailing_idx += 1;
        out_idx += 1;
    }

    Ok(OutputRange::covering(beg_idx, end_idx))
}

/// Compute an exponential moving average over `[start_idx, end_idx]`.
///
/// The first output is the SMA of the window ending at the effective start;
/// subsequent outputs follow `ema = α·x + (1 − α)·ema` in double precision.
///
/// # Errors
///
/// Fails on an invalid index range, an unsupported period, or an output
/// slice shorter than the effective range.
pub fn ema_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    period: usize,
    out: &mut [T],
) -> Result<OutputRange> {
    validate_range(start_idx, end_idx, input.len())?;
    let lookback = lookback::ema_lookback(period)?;

    let beg_idx = start_idx.max(lookback);
    if beg_idx > end_idx {
        return Ok(OutputRange::EMPTY);
    }
    validate_output_len(end_idx - beg_idx + 1, out.len())?;

    let mut acc = WindowAccumulator::new(period);
    for sample in &input[beg_idx + 1 - period..=beg_idx] {
        acc.add(sample.widen());
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut ema = acc.mean();
    out[0] = T::narrow(ema);

    let mut out_idx = 1;
    for sample in &input[beg_idx + 1..=end_idx] {
        ema = alpha * sample.widen() + (1.0 - alpha) * ema;
        out[out_idx] = T::narrow(ema);
        out_idx += 1;
    }

    Ok(OutputRange::covering(beg_idx, end_idx))
}

/// Compute a moving average selected by `method`.
///
/// # Errors
///
/// Propagates the selected kernel's errors verbatim.
pub fn ma_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    period: usize,
    method: MaMethod,
    out: &mut [T],
) -> Result<OutputRange> {
    match method {
        MaMethod::Sma => sma_into(input, start_idx, end_idx, period, out),
        MaMethod::Ema => ema_into(input, start_idx, end_idx, period, out),
    }
}
