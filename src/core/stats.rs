use std::cmp::Reverse;

use ordered_float::OrderedFloat;

/// Running mean/variance accumulator (Welford's online update).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Welford {
    count: u64,
    mean: f64,
    sum_sq_dev: f64,
}

impl Welford {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.sum_sq_dev += delta * (value - self.mean);
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Population variance (`s / n`), `None` before the first sample.
    #[must_use]
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum_sq_dev / self.count as f64)
    }
}

impl FromIterator<f64> for Welford {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for value in iter {
            acc.push(value);
        }
        acc
    }
}

/// Population variance of `values`; `None` for an empty slice.
#[must_use]
pub fn variance(values: &[f64]) -> Option<f64> {
    values.iter().copied().collect::<Welford>().population_variance()
}

#[must_use]
pub fn standard_deviation(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Index of the first occurrence of the minimum value.
#[must_use]
pub fn index_of_min(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| OrderedFloat(**v))
        .map(|(index, _)| index)
}

/// Index of the first occurrence of the maximum value.
#[must_use]
pub fn index_of_max(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by_key(|(index, v)| (OrderedFloat(**v), Reverse(*index)))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welford_matches_two_pass_on_offset_series() {
        let values: Vec<f64> = (0..1_000).map(|i| 1.0e9 + f64::from(i % 7)).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let two_pass =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

        let welford = variance(&values).expect("variance");
        assert!((welford - two_pass).abs() <= 1e-5);
    }

    #[test]
    fn empty_accumulator_has_no_moments() {
        let acc = Welford::new();
        assert_eq!(acc.count(), 0);
        assert!(acc.mean().is_none());
        assert!(acc.population_variance().is_none());
    }

    #[test]
    fn extreme_indices_prefer_first_occurrence() {
        let values = [3.0, 1.0, 9.0, 1.0, 9.0];
        assert_eq!(index_of_min(&values), Some(1));
        assert_eq!(index_of_max(&values), Some(2));
    }
}
