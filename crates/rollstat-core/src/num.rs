//! Numeric abstraction over the supported sample precisions.
//!
//! Kernels are generic over [`SampleFloat`] so a single source monomorphizes
//! for both `f32` and `f64` inputs. Accumulation is never performed in the
//! sample type: every kernel widens to `f64` internally and narrows only when
//! writing an output slot, so the numeric contract is identical for both
//! precisions.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Trait for floating-point sample types accepted by the kernels.
///
/// Implemented for `f32` and `f64`. The two conversions are the only
/// precision-specific operations the engine needs; everything else runs in
/// `f64`.
///
/// # Example
///
/// ```rust
/// use rollstat_core::SampleFloat;
///
/// fn widen_sum<T: SampleFloat>(samples: &[T]) -> f64 {
///     samples.iter().map(|x| x.widen()).sum()
/// }
///
/// assert_eq!(widen_sum(&[1.0f32, 2.0f32]), 3.0);
/// ```
pub trait SampleFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static
{
    /// Widen the sample to `f64` for internal accumulation.
    #[must_use]
    fn widen(self) -> f64;

    /// Narrow an `f64` accumulator value back to the sample type.
    ///
    /// Lossy for `f32`; the loss happens once per output slot, never inside
    /// the accumulation itself.
    #[must_use]
    fn narrow(value: f64) -> Self;
}

impl SampleFloat for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value as f32
    }
}

impl SampleFloat for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_f32() {
        assert_eq!(42.5f32.widen(), 42.5f64);
        assert_eq!(0.0f32.widen(), 0.0f64);
    }

    #[test]
    fn test_widen_f64_identity() {
        assert_eq!(42.5f64.widen(), 42.5f64);
    }

    #[test]
    fn test_narrow() {
        assert_eq!(<f32 as SampleFloat>::narrow(42.5), 42.5f32);
        assert_eq!(<f64 as SampleFloat>::narrow(42.5), 42.5f64);
    }

    #[test]
    fn test_narrow_f32_is_lossy() {
        let wide = 0.1f64;
        let narrowed = <f32 as SampleFloat>::narrow(wide);
        assert_ne!(f64::from(narrowed), wide);
    }
}
