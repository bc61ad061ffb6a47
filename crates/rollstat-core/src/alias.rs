//! Scratch-buffer assignment for multi-output kernels.
//!
//! Kernels never allocate: intermediate series are computed directly into
//! caller-supplied output arrays. When a caller drives the engine through a
//! binding layer where the input may share backing storage with one of the
//! outputs, an output that aliases the input must not be used as scratch
//! space, or the input would be corrupted mid-computation.
//!
//! The caller states the aliasing relationship explicitly through
//! [`BandAliasing`] (the same-backing-store predicate; a binding layer infers
//! it from pointer identity). [`ScratchPlan::resolve`] then deterministically
//! assigns the two scratch roles of a band-style kernel, preferring the
//! middle-band output for the base series so that output is scratch and final
//! in one step, saving a copy.

use crate::error::{KernelError, Result};

/// Logical role of one output array of a band-style kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    /// Upper band output.
    Upper,
    /// Middle band output (the base moving-average series).
    Middle,
    /// Lower band output.
    Lower,
}

/// Which output arrays share backing storage with the read-only input.
///
/// All-false is the common case: the caller handed the kernel four distinct
/// arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandAliasing {
    /// The upper-band output aliases the input.
    pub upper: bool,
    /// The middle-band output aliases the input.
    pub middle: bool,
    /// The lower-band output aliases the input.
    pub lower: bool,
}

impl BandAliasing {
    /// No output aliases the input.
    pub const DISJOINT: Self = Self {
        upper: false,
        middle: false,
        lower: false,
    };

    fn aliases(&self, role: BandRole) -> bool {
        match role {
            BandRole::Upper => self.upper,
            BandRole::Middle => self.middle,
            BandRole::Lower => self.lower,
        }
    }
}

/// Scratch-role assignment for one band-style kernel invocation.
///
/// `base` holds the moving-average series while the deviation is derived;
/// `dev` holds the deviation series until the final band loop consumes it.
/// The deviation scratch is never the middle output, so the base series can
/// be settled into the middle band before the bands are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchPlan {
    /// Output array holding the base (moving-average) series.
    pub base: BandRole,
    /// Output array holding the deviation series.
    pub dev: BandRole,
}

impl ScratchPlan {
    /// Resolve scratch roles for the given aliasing pattern.
    ///
    /// The assignment is deterministic: the same pattern always yields the
    /// same plan. Whenever the middle output does not alias the input, it is
    /// chosen as the base scratch, eliminating the copy into the final
    /// middle-band location.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::AliasedScratch`] when the pattern flags enough
    /// outputs that a scratch role would land on input-backed storage (the
    /// caller aliased the input against two or more outputs).
    pub fn resolve(aliasing: BandAliasing) -> Result<Self> {
        let plan = if aliasing.upper {
            Self {
                base: BandRole::Middle,
                dev: BandRole::Lower,
            }
        } else if aliasing.lower {
            Self {
                base: BandRole::Middle,
                dev: BandRole::Upper,
            }
        } else if aliasing.middle {
            Self {
                base: BandRole::Lower,
                dev: BandRole::Upper,
            }
        } else {
            Self {
                base: BandRole::Middle,
                dev: BandRole::Upper,
            }
        };

        if aliasing.aliases(plan.base) || aliasing.aliases(plan.dev) {
            return Err(KernelError::AliasedScratch);
        }
        Ok(plan)
    }
}
