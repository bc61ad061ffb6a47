//! Bollinger Bands kernel.
//!
//! The multi-output exemplar: the middle band is a moving average, the upper
//! and lower bands add and subtract a multiple of the rolling standard
//! deviation. Intermediate series live in two of the three output arrays,
//! selected by the core's [`ScratchPlan`], so the kernel allocates nothing.
//!
//! The deviation series always uses a multiplier of 1.0 internally; the
//! configured multipliers are applied only in the final band loop. When the
//! middle band is a simple moving average, the deviation reuses the already
//! computed means instead of re-deriving them.

use rollstat_core::{
    lookback,
    num::SampleFloat,
    range::{validate_output_len, validate_range, OutputRange},
    BandAliasing, BandRole, KernelError, MaMethod, Result, ScratchPlan,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ma::ma_into;
use crate::stddev::{stddev_from_precalc_ma, stddev_into};

/// Configuration for the Bollinger Bands kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BbandsConfig {
    /// Window length of the middle band (default: 5).
    pub period: usize,
    /// Deviation multiplier for the upper band (default: 2.0).
    pub dev_up: f64,
    /// Deviation multiplier for the lower band (default: 2.0).
    pub dev_dn: f64,
    /// Moving-average method for the middle band (default: SMA).
    pub method: MaMethod,
}

impl Default for BbandsConfig {
    fn default() -> Self {
        Self {
            period: 5,
            dev_up: 2.0,
            dev_dn: 2.0,
            method: MaMethod::Sma,
        }
    }
}

impl BbandsConfig {
    /// Create a configuration with symmetric multipliers and the SMA method.
    #[must_use]
    pub fn new(period: usize, dev_up: f64, dev_dn: f64) -> Self {
        Self {
            period,
            dev_up,
            dev_dn,
            method: MaMethod::Sma,
        }
    }

    /// Select the moving-average method.
    #[must_use]
    pub fn with_method(mut self, method: MaMethod) -> Self {
        self.method = method;
        self
    }
}

/// The three caller-allocated output arrays of a band kernel.
pub struct BandBuffers<'a, T: SampleFloat> {
    /// Upper band output.
    pub upper: &'a mut [T],
    /// Middle band output.
    pub middle: &'a mut [T],
    /// Lower band output.
    pub lower: &'a mut [T],
}

impl<'a, T: SampleFloat> BandBuffers<'a, T> {
    /// Borrow the array holding the given role.
    fn slot_mut(&mut self, role: BandRole) -> &mut [T] {
        match role {
            BandRole::Upper => self.upper,
            BandRole::Middle => self.middle,
            BandRole::Lower => self.lower,
        }
    }

    /// Borrow two distinct roles at once.
    fn pair_mut(&mut self, a: BandRole, b: BandRole) -> Result<(&mut [T], &mut [T])> {
        use BandRole::{Lower, Middle, Upper};
        match (a, b) {
            (Upper, Middle) => Ok((self.upper, self.middle)),
            (Upper, Lower) => Ok((self.upper, self.lower)),
            (Middle, Upper) => Ok((self.middle, self.upper)),
            (Middle, Lower) => Ok((self.middle, self.lower)),
            (Lower, Upper) => Ok((self.lower, self.upper)),
            (Lower, Middle) => Ok((self.lower, self.middle)),
            _ => Err(KernelError::Internal("scratch roles collide")),
        }
    }
}

/// Compute Bollinger Bands over `[start_idx, end_idx]`.
///
/// `aliasing` states which output arrays share backing storage with the
/// input at the caller's boundary; the scratch plan is resolved from it
/// before anything is written. A sub-computation failure propagates
/// unchanged, and a sub-computation that produces zero elements returns the
/// empty range as success.
///
/// # Errors
///
/// Fails on an invalid index range, an unsupported period, non-finite
/// multipliers, an unsatisfiable aliasing pattern, or short output slices.
pub fn bbands_into<T: SampleFloat>(
    input: &[T],
    start_idx: usize,
    end_idx: usize,
    config: &BbandsConfig,
    aliasing: BandAliasing,
    out: &mut BandBuffers<'_, T>,
) -> Result<OutputRange> {
    validate_range(start_idx, end_idx, input.len())?;
    if !config.dev_up.is_finite() {
        return Err(KernelError::InvalidMultiplier {
            name: "dev_up",
            value: config.dev_up,
        });
    }
    if !config.dev_dn.is_finite() {
        return Err(KernelError::InvalidMultiplier {
            name: "dev_dn",
            value: config.dev_dn,
        });
    }

    let plan = ScratchPlan::resolve(aliasing)?;

    // All three outputs are checked up front. The two scratch outputs would
    // be caught by the sub-kernels, but the third is only written in the
    // final band loop, well after the first write.
    let lookback = lookback::bbands_lookback(config.period, config.method)?;
    let beg_idx = start_idx.max(lookback);
    if beg_idx > end_idx {
        return Ok(OutputRange::EMPTY);
    }
    let required = end_idx - beg_idx + 1;
    validate_output_len(required, out.upper.len())?;
    validate_output_len(required, out.middle.len())?;
    validate_output_len(required, out.lower.len())?;

    // Middle band first; the other two bands hang off it.
    let range = ma_into(
        input,
        start_idx,
        end_idx,
        config.period,
        config.method,
        out.slot_mut(plan.base),
    )?;
    if range.is_empty() {
        return Ok(range);
    }

    // Deviation series, multiplier fixed at 1.0 regardless of the band
    // multipliers.
    match config.method {
        MaMethod::Sma => {
            let (base, dev) = out.pair_mut(plan.base, plan.dev)?;
            stddev_from_precalc_ma(input, base, range, config.period, dev)?;
        }
        _ => {
            let dev_range = stddev_into(
                input,
                range.beg_idx,
                end_idx,
                config.period,
                1.0,
                out.slot_mut(plan.dev),
            )?;
            if dev_range != range {
                return Err(KernelError::Internal("deviation range diverged from middle band"));
            }
        }
    }

    // Settle the base series into the middle output unless the plan already
    // targeted it.
    if plan.base != BandRole::Middle {
        let (middle, base) = out.pair_mut(BandRole::Middle, plan.base)?;
        middle[..range.nb_element].copy_from_slice(&base[..range.nb_element]);
    }

    write_bands(out, plan.dev, range.nb_element, config.dev_up, config.dev_dn)?;

    Ok(range)
}

/// Final tight loop: `upper = middle + dev·k_up`, `lower = middle − dev·k_dn`.
///
/// The deviation scratch is one of the band outputs being written, so each
/// deviation value is read before its slot is overwritten. A single multiply
/// suffices when the multipliers are equal.
fn write_bands<T: SampleFloat>(
    out: &mut BandBuffers<'_, T>,
    dev_slot: BandRole,
    nb_element: usize,
    dev_up: f64,
    dev_dn: f64,
) -> Result<()> {
    match dev_slot {
        BandRole::Upper => {
            if dev_up == dev_dn {
                for i in 0..nb_element {
                    let dev = out.upper[i].widen() * dev_up;
                    let mid = out.middle[i].widen();
                    out.upper[i] = T::narrow(mid + dev);
                    out.lower[i] = T::narrow(mid - dev);
                }
            } else {
                for i in 0..nb_element {
                    let dev = out.upper[i].widen();
                    let mid = out.middle[i].widen();
                    out.upper[i] = T::narrow(mid + dev * dev_up);
                    out.lower[i] = T::narrow(mid - dev * dev_dn);
                }
            }
            Ok(())
        }
        BandRole::Lower => {
            if dev_up == dev_dn {
                for i in 0..nb_element {
                    let dev = out.lower[i].widen() * dev_up;
                    let mid = out.middle[i].widen();
                    out.upper[i] = T::narrow(mid + dev);
                    out.lower[i] = T::narrow(mid - dev);
                }
            } else {
                for i in 0..nb_element {
                    let dev = out.lower[i].widen();
                    let mid = out.middle[i].widen();
                    out.upper[i] = T::narrow(mid + dev * dev_up);
                    out.lower[i] = T::narrow(mid - dev * dev_dn);
                }
            }
            Ok(())
        }
        // The plan never parks the deviation in the middle output.
        BandRole::Middle => Err(KernelError::Internal("deviation scratch landed on middle band")),
    }
}
