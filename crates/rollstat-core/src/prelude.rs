//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use rollstat_core::prelude::*;
//!
//! let acc = WindowAccumulator::new(5);
//! let plan = ScratchPlan::resolve(BandAliasing::DISJOINT).unwrap();
//! assert_eq!(plan.base, BandRole::Middle);
//! let _ = acc;
//! ```

pub use crate::accum::WindowAccumulator;
pub use crate::alias::{BandAliasing, BandRole, ScratchPlan};
pub use crate::error::{KernelError, Result};
pub use crate::lookback::{self, MaMethod, MAX_PERIOD, MIN_PERIOD};
pub use crate::num::SampleFloat;
pub use crate::range::{validate_output_len, validate_range, OutputRange};
