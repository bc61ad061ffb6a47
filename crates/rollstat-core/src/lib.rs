//! # rollstat-core
//!
//! Core mechanics shared by every rolling-window indicator kernel:
//!
//! - [`SampleFloat`] - Numeric abstraction over `f32`/`f64` samples
//! - [`KernelError`] - Error taxonomy for kernel invocations
//! - [`OutputRange`] - The valid output sub-range of one invocation
//! - [`lookback`] - Warm-up resolution for window configurations
//! - [`WindowAccumulator`] - O(1) sliding sum / sum-of-squares
//! - [`ScratchPlan`] - Aliasing-aware scratch buffer assignment
//!
//! The engine is stateless between calls: every entity here is created at the
//! start of one kernel invocation and dropped at its end. Kernels never
//! allocate; intermediate results live in caller-supplied output arrays,
//! selected by the [`ScratchPlan`].
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `serde` - Enable serialization of configuration types
//!
//! ## Example
//!
//! ```rust
//! use rollstat_core::prelude::*;
//!
//! let lookback = lookback::sma_lookback(3).unwrap();
//! assert_eq!(lookback, 2);
//!
//! let mut acc = WindowAccumulator::new(3);
//! for x in [1.0, 2.0, 3.0] {
//!     acc.add(x);
//! }
//! assert_eq!(acc.mean(), 2.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod accum;
pub mod alias;
pub mod error;
pub mod lookback;
pub mod num;
pub mod prelude;
pub mod range;

pub use accum::WindowAccumulator;
pub use alias::{BandAliasing, BandRole, ScratchPlan};
pub use error::{KernelError, Result};
pub use lookback::{MaMethod, MAX_PERIOD, MIN_PERIOD};
pub use num::SampleFloat;
pub use range::OutputRange;
