//! Property-based tests for rollstat-kernels.
//!
//! These tests verify invariants that must hold for all inputs.

use proptest::prelude::*;

use rollstat_kernels::prelude::*;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Generate a valid sample value (finite, plausible price scale).
fn valid_sample() -> impl Strategy<Value = f64> {
    (0.01f64..10000.0).prop_filter("must be finite", |x| x.is_finite())
}

/// Generate a sample series of the given length bounds.
fn sample_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(valid_sample(), min_len..=max_len)
}

/// Direct O(n·p) mean of the window ending at `i`, for cross-checking the
/// sliding-sum kernel.
fn direct_mean(data: &[f64], i: usize, period: usize) -> f64 {
    data[i + 1 - period..=i].iter().sum::<f64>() / period as f64
}

// ============================================================================
// Moving Average Properties
// ============================================================================

proptest! {
    /// Sliding-sum SMA must agree with a direct per-window mean.
    #[test]
    fn sma_matches_direct_mean(
        data in sample_series(5, 60),
        period in 2usize..=5,
    ) {
        let end = data.len() - 1;
        let mut out = vec![0.0; data.len()];
        let range = sma_into(&data, 0, end, period, &mut out).unwrap();

        for slot in 0..range.nb_element {
            let i = range.beg_idx + slot;
            let expected = direct_mean(&data, i, period);
            prop_assert!((out[slot] - expected).abs() < 1e-9,
                "slot {}: {} vs {}", slot, out[slot], expected);
        }
    }

    /// The reported range is always `beg = max(start, lookback)` and
    /// `nb = end - beg + 1`, or the empty sentinel.
    #[test]
    fn output_range_is_consistent(
        data in sample_series(2, 40),
        period in 2usize..=8,
        start in 0usize..20,
    ) {
        let end = data.len() - 1;
        prop_assume!(start <= end);
        let mut out = vec![0.0; data.len()];

        let range = sma_into(&data, start, end, period, &mut out).unwrap();
        let expected_beg = start.max(period - 1);
        if expected_beg > end {
            prop_assert_eq!(range, OutputRange::EMPTY);
        } else {
            prop_assert_eq!(range.beg_idx, expected_beg);
            prop_assert_eq!(range.nb_element, end - expected_beg + 1);
        }
    }

    /// Kernels are pure: repeated invocations are bit-identical.
    #[test]
    fn sma_is_deterministic(
        data in sample_series(5, 40),
        period in 2usize..=5,
    ) {
        let end = data.len() - 1;
        let mut first = vec![0.0; data.len()];
        let mut second = vec![0.0; data.len()];

        let r1 = sma_into(&data, 0, end, period, &mut first).unwrap();
        let r2 = sma_into(&data, 0, end, period, &mut second).unwrap();
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// Deviation Properties
// ============================================================================

proptest! {
    /// Standard deviation is never negative and never NaN, even when
    /// cancellation drives the raw variance slightly below zero.
    #[test]
    fn stddev_non_negative_and_finite(
        data in sample_series(5, 60),
        period in 2usize..=6,
    ) {
        let end = data.len() - 1;
        let mut out = vec![0.0; data.len()];
        let range = stddev_into(&data, 0, end, period, 1.0, &mut out).unwrap();

        for &v in &out[..range.nb_element] {
            prop_assert!(v >= 0.0, "negative deviation {}", v);
            prop_assert!(!v.is_nan());
        }
    }

    /// Variance output obeys the same non-negativity clamp.
    #[test]
    fn variance_non_negative(
        data in sample_series(5, 60),
        period in 2usize..=6,
    ) {
        let end = data.len() - 1;
        let mut out = vec![0.0; data.len()];
        let range = var_into(&data, 0, end, period, &mut out).unwrap();

        for &v in &out[..range.nb_element] {
            prop_assert!(v >= 0.0);
            prop_assert!(!v.is_nan());
        }
    }

    /// The precomputed-mean derivation must match the fresh derivation.
    #[test]
    fn precalc_ma_path_matches_fresh(
        data in sample_series(6, 50),
        period in 2usize..=5,
    ) {
        let end = data.len() - 1;
        let mut ma = vec![0.0; data.len()];
        let ma_range = sma_into(&data, 0, end, period, &mut ma).unwrap();

        let mut reused = vec![0.0; data.len()];
        stddev_from_precalc_ma(&data, &ma, ma_range, period, &mut reused).unwrap();

        let mut fresh = vec![0.0; data.len()];
        let fresh_range = stddev_into(&data, 0, end, period, 1.0, &mut fresh).unwrap();

        prop_assert_eq!(ma_range, fresh_range);
        for i in 0..ma_range.nb_element {
            prop_assert!((reused[i] - fresh[i]).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Bollinger Band Properties
// ============================================================================

proptest! {
    /// With non-negative multipliers the bands are always ordered
    /// lower <= middle <= upper.
    #[test]
    fn bands_are_ordered(
        data in sample_series(6, 60),
        period in 2usize..=6,
        dev in 0.5f64..4.0,
    ) {
        let end = data.len() - 1;
        let config = BbandsConfig::new(period, dev, dev);
        let mut upper = vec![0.0; data.len()];
        let mut middle = vec![0.0; data.len()];
        let mut lower = vec![0.0; data.len()];
        let mut out = BandBuffers {
            upper: &mut upper,
            middle: &mut middle,
            lower: &mut lower,
        };

        let range =
            bbands_into(&data, 0, end, &config, BandAliasing::DISJOINT, &mut out).unwrap();
        for i in 0..range.nb_element {
            prop_assert!(lower[i] <= middle[i] + 1e-9);
            prop_assert!(middle[i] <= upper[i] + 1e-9);
        }
    }

    /// The declared aliasing pattern reroutes scratch placement but must not
    /// change the results.
    #[test]
    fn aliasing_pattern_is_result_neutral(
        data in sample_series(6, 40),
        period in 2usize..=5,
        aliased_slot in 0usize..3,
    ) {
        let end = data.len() - 1;
        let config = BbandsConfig::new(period, 2.0, 2.0);

        let mut upper = vec![0.0; data.len()];
        let mut middle = vec![0.0; data.len()];
        let mut lower = vec![0.0; data.len()];
        let mut out = BandBuffers {
            upper: &mut upper,
            middle: &mut middle,
            lower: &mut lower,
        };
        let baseline =
            bbands_into(&data, 0, end, &config, BandAliasing::DISJOINT, &mut out).unwrap();

        let pattern = BandAliasing {
            upper: aliased_slot == 0,
            middle: aliased_slot == 1,
            lower: aliased_slot == 2,
        };
        let mut aliased_upper = vec![0.0; data.len()];
        let mut aliased_middle = vec![0.0; data.len()];
        let mut aliased_lower = vec![0.0; data.len()];
        let mut aliased = BandBuffers {
            upper: &mut aliased_upper,
            middle: &mut aliased_middle,
            lower: &mut aliased_lower,
        };
        let range = bbands_into(&data, 0, end, &config, pattern, &mut aliased).unwrap();

        prop_assert_eq!(baseline, range);
        for i in 0..range.nb_element {
            prop_assert!((upper[i] - aliased_upper[i]).abs() < 1e-9);
            prop_assert!((middle[i] - aliased_middle[i]).abs() < 1e-9);
            prop_assert!((lower[i] - aliased_lower[i]).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Pattern Properties
// ============================================================================

proptest! {
    /// Doji flags are always exactly 0 or 100.
    #[test]
    fn doji_flags_are_binary(
        closes in sample_series(12, 40),
        avg_period in 0usize..=10,
    ) {
        let len = closes.len();
        let open: Vec<f64> = closes.iter().map(|c| c * 1.001).collect();
        let high: Vec<f64> = closes.iter().map(|c| c * 1.01).collect();
        let low: Vec<f64> = closes.iter().map(|c| c * 0.99).collect();

        let config = DojiConfig::new(avg_period, 0.1);
        let mut out = vec![0; len];
        let range =
            doji_into(&open, &high, &low, &closes, 0, len - 1, &config, &mut out).unwrap();

        prop_assert_eq!(range.beg_idx, avg_period);
        for &flag in &out[..range.nb_element] {
            prop_assert!(flag == PATTERN_MATCH || flag == PATTERN_NONE);
        }
    }
}
