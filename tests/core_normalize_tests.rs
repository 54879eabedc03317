use sparkline_rs::SparklineError;
use sparkline_rs::core::{
    DEGENERATE_MIDPOINT, NormalizedSeries, SampleRange, ValueScale, VerticalMapping, Welford,
    index_of_max, index_of_min, standard_deviation, variance,
};

#[test]
fn welford_matches_population_variance() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let acc: Welford = values.iter().copied().collect();

    assert_eq!(acc.count(), 8);
    assert!((acc.mean().expect("mean") - 5.0).abs() <= 1e-12);
    assert!((acc.population_variance().expect("variance") - 4.0).abs() <= 1e-12);
    assert!((standard_deviation(&values).expect("std dev") - 2.0).abs() <= 1e-12);
}

#[test]
fn variance_of_empty_input_is_undefined() {
    assert_eq!(variance(&[]), None);
    assert_eq!(Welford::new().mean(), None);
}

#[test]
fn single_sample_has_zero_variance() {
    assert_eq!(variance(&[42.0]), Some(0.0));
}

#[test]
fn extreme_indices_pick_first_occurrence() {
    let values = [3.0, 1.0, 9.0, 1.0, 9.0];
    assert_eq!(index_of_min(&values), Some(1));
    assert_eq!(index_of_max(&values), Some(2));
    assert_eq!(index_of_min(&[]), None);
}

#[test]
fn normalization_maps_range_onto_zero_to_hundred() {
    let series =
        NormalizedSeries::new(&[10.0, 15.0, 20.0], ValueScale::Normalized).expect("series");
    assert_eq!(series.values(), &[0.0, 50.0, 100.0]);
    assert_eq!(series.raw(), &[10.0, 15.0, 20.0]);
    assert_eq!(series.last_raw(), 20.0);
}

#[test]
fn constant_series_normalizes_to_midpoint() {
    let series = NormalizedSeries::new(&[7.0, 7.0, 7.0], ValueScale::Normalized).expect("series");
    assert!(series.range().is_degenerate());
    assert!(series.values().iter().all(|&v| v == DEGENERATE_MIDPOINT));
    assert_eq!(series.range().denormalize(DEGENERATE_MIDPOINT), 7.0);
}

#[test]
fn raw_scale_keeps_samples_untouched() {
    let series = NormalizedSeries::new(&[85.0], ValueScale::Raw).expect("series");
    assert_eq!(series.values(), &[85.0]);
}

#[test]
fn empty_samples_are_rejected() {
    let err = NormalizedSeries::new(&[], ValueScale::Normalized).expect_err("empty must fail");
    assert!(matches!(err, SparklineError::EmptyData));
}

#[test]
fn non_finite_samples_are_rejected() {
    let err = SampleRange::from_samples(&[1.0, f64::NAN]).expect_err("nan must fail");
    assert!(matches!(err, SparklineError::InvalidData(_)));
}

#[test]
fn vertical_mapping_reserves_top_and_bottom_rows() {
    let mapping = VerticalMapping::new(14.0).expect("mapping");
    assert!((mapping.y_for(0.0) - 11.0).abs() <= 1e-12);
    assert!((mapping.y_for(100.0) - (11.0 - 1000.0 / 101.0)).abs() <= 1e-12);
    assert!(mapping.y_for(100.0) > 1.0);
}

#[test]
fn vertical_mapping_needs_more_than_four_rows() {
    assert!(VerticalMapping::new(4.0).is_err());
    assert!(VerticalMapping::new(5.0).is_ok());
}
