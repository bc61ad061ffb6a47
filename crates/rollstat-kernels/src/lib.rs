//! # rollstat-kernels
//!
//! Rolling-window indicator kernels built on `rollstat-core`.
//!
//! Every kernel follows the same calling convention: read-only input slices,
//! an inclusive `[start_idx, end_idx]` request, a validated configuration,
//! and caller-allocated output slices. The kernel shifts the start forward by
//! the configuration's lookback, runs a single left-to-right pass with O(1)
//! window updates, and reports the valid output sub-range. Kernels hold no
//! state across calls and never allocate.
//!
//! - [`ma`] - simple and exponential moving averages
//! - [`stddev`] - rolling population variance and standard deviation
//! - [`bbands`] - Bollinger Bands (the multi-output scratch-planning exemplar)
//! - [`pattern`] - rolling body-average candlestick flags (Doji exemplar)
//!
//! # Example
//!
//! ```rust
//! use rollstat_kernels::prelude::*;
//!
//! let closes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let mut out = [0.0; 6];
//!
//! let range = sma_into(&closes, 0, 5, 3, &mut out).unwrap();
//! assert_eq!(range.beg_idx, 2);
//! assert_eq!(range.nb_element, 4);
//! assert_eq!(out[0], 2.0); // mean of 1, 2, 3
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bbands;
pub mod ma;
pub mod pattern;
pub mod prelude;
pub mod stddev;

pub use bbands::{bbands_into, BandBuffers, BbandsConfig};
pub use ma::{ema_into, ma_into, sma_into};
pub use pattern::{doji_into, DojiConfig};
pub use stddev::{stddev_from_precalc_ma, stddev_into, var_into};
