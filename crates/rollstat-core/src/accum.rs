//! O(1) sliding-window accumulation.
//!
//! [`WindowAccumulator`] maintains the running sum and sum of squares of a
//! fixed-size window, in `f64` regardless of the sample precision. Kernels
//! advance it by adding the sample entering the window and removing the
//! sample leaving it; the mean and population variance fall out of the
//! `E[x²] − (E[x])²` identity without re-summing the window.
//!
//! The accumulator stores no window contents. The caller owns the series and
//! indexes the trailing sample itself, which keeps the engine allocation-free.

/// Running sum and sum-of-squares over a sliding fixed-size window.
///
/// All state is call-scoped: an accumulator is built at the start of one
/// kernel invocation and dropped at its end.
///
/// # Example
///
/// ```rust
/// use rollstat_core::WindowAccumulator;
///
/// let data = [2.0, 4.0, 6.0, 8.0];
/// let mut acc = WindowAccumulator::new(3);
///
/// for &x in &data[..3] {
///     acc.add(x);
/// }
/// assert_eq!(acc.mean(), 4.0);
///
/// acc.slide(data[3], data[0]); // window is now [4, 6, 8]
/// assert_eq!(acc.mean(), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct WindowAccumulator {
    /// Window length as f64, cached for the divisions.
    period: f64,
    /// Running sum of the window samples.
    sum: f64,
    /// Running sum of the squared window samples.
    sum_sq: f64,
}

impl WindowAccumulator {
    /// Create an accumulator for a window of `period` samples.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period: period as f64,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Add the sample entering the window.
    #[inline]
    pub fn add(&mut self, sample: f64) {
        self.sum += sample;
        self.sum_sq += sample * sample;
    }

    /// Remove the trailing sample leaving the window.
    #[inline]
    pub fn remove(&mut self, sample: f64) {
        self.sum -= sample;
        self.sum_sq -= sample * sample;
    }

    /// Advance the window by one step: add `entering`, remove `leaving`.
    #[inline]
    pub fn slide(&mut self, entering: f64, leaving: f64) {
        self.add(entering);
        self.remove(leaving);
    }

    /// Mean of the current window.
    #[inline]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum / self.period
    }

    /// Mean of the squared samples of the current window.
    #[inline]
    #[must_use]
    pub fn mean_sq(&self) -> f64 {
        self.sum_sq / self.period
    }

    /// Population variance of the current window.
    ///
    /// Computed as `E[x²] − (E[x])²`. Floating-point cancellation on
    /// near-constant windows can push the raw value slightly negative; the
    /// result is clamped to zero so variance is never negative and a later
    /// square root never produces NaN.
    #[inline]
    #[must_use]
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let raw = self.mean_sq() - mean * mean;
        if raw > 0.0 {
            raw
        } else {
            0.0
        }
    }

    /// Population variance derived from an externally supplied mean.
    ///
    /// Used when the caller already paid for an aligned moving average: only
    /// the sum of squares is consumed, `variance = Σx²/N − mean²`. Clamped to
    /// zero like [`variance`](Self::variance).
    #[inline]
    #[must_use]
    pub fn variance_about(&self, mean: f64) -> f64 {
        let raw = self.mean_sq() - mean * mean;
        if raw > 0.0 {
            raw
        } else {
            0.0
        }
    }
}
