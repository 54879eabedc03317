use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sparkline_rs::core::{
    NormalizedSeries, SampleRange, ValueScale, VerticalMapping, Welford, index_of_max,
    index_of_min,
};

proptest! {
    #[test]
    fn normalized_values_stay_in_range_and_hit_extremes(
        samples in prop::collection::vec(-1.0e6f64..1.0e6f64, 1..96)
    ) {
        let series = NormalizedSeries::new(&samples, ValueScale::Normalized).expect("series");
        let values = series.values();

        prop_assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
        if !series.range().is_degenerate() {
            let min_index = index_of_min(&samples).expect("min");
            let max_index = index_of_max(&samples).expect("max");
            prop_assert_eq!(values[min_index], 0.0);
            prop_assert!((values[max_index] - 100.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn denormalize_inverts_normalize(
        lo in -1.0e4f64..0.0,
        span in 1.0e-3f64..1.0e4,
        t in 0.0f64..=1.0
    ) {
        let range = SampleRange::from_samples(&[lo, lo + span]).expect("range");
        let value = lo + t * span;
        let back = range.denormalize(range.normalize(value));
        prop_assert!((back - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn welford_agrees_with_two_pass_variance(
        samples in prop::collection::vec(-1.0e3f64..1.0e3f64, 1..64)
    ) {
        let acc: Welford = samples.iter().copied().collect();
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let two_pass = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        assert_abs_diff_eq!(
            acc.population_variance().expect("variance"),
            two_pass,
            epsilon = 1e-6
        );
    }

    #[test]
    fn vertical_mapping_is_monotone_decreasing(
        height in 5.0f64..200.0,
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0
    ) {
        let mapping = VerticalMapping::new(height).expect("mapping");
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mapping.y_for(high) <= mapping.y_for(low));
        prop_assert!(mapping.y_for(100.0) >= 0.0);
        prop_assert!(mapping.y_for(0.0) <= height);
    }
}
