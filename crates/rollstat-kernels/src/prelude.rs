//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use rollstat_kernels::prelude::*;
//!
//! let closes = [2.0, 4.0, 6.0, 8.0];
//! let mut out = [0.0; 4];
//! let range = sma_into(&closes, 0, 3, 2, &mut out).unwrap();
//! assert_eq!(range.nb_element, 3);
//! ```

pub use rollstat_core::prelude::*;

pub use crate::bbands::{bbands_into, BandBuffers, BbandsConfig};
pub use crate::ma::{ema_into, ma_into, sma_into};
pub use crate::pattern::{doji_into, DojiConfig, PATTERN_MATCH, PATTERN_NONE};
pub use crate::stddev::{stddev_from_precalc_ma, stddev_into, var_into};
