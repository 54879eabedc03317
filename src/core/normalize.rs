use tracing::debug;

use crate::core::stats::min_max;
use crate::error::{SparklineError, SparklineResult};

/// Upper bound of the normalized scale.
pub const NORMALIZED_MAX: f64 = 100.0;
/// Value every sample maps to when the series has no spread.
pub const DEGENERATE_MIDPOINT: f64 = 50.0;

/// Observed `[min, max]` of a raw sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub fn from_samples(samples: &[f64]) -> SparklineResult<Self> {
        validate_samples(samples)?;
        let (min, max) = min_max(samples).ok_or(SparklineError::EmptyData)?;
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Maps a raw value onto the `0..=100` scale.
    ///
    /// A degenerate range maps everything to [`DEGENERATE_MIDPOINT`].
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_MIDPOINT;
        }
        (value - self.min) / self.span() * NORMALIZED_MAX
    }

    /// Inverse of [`SampleRange::normalize`]; a degenerate range yields `min`.
    #[must_use]
    pub fn denormalize(self, normalized: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        self.min + normalized / NORMALIZED_MAX * self.span()
    }
}

/// Whether a chart consumes normalized or raw sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueScale {
    Normalized,
    Raw,
}

/// Samples prepared for a chart builder.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    raw: Vec<f64>,
    values: Vec<f64>,
    range: SampleRange,
}

impl NormalizedSeries {
    pub fn new(samples: &[f64], scale: ValueScale) -> SparklineResult<Self> {
        let range = SampleRange::from_samples(samples)?;
        let values = match scale {
            ValueScale::Raw => samples.to_vec(),
            ValueScale::Normalized => {
                if range.is_degenerate() {
                    debug!(
                        value = range.min,
                        count = samples.len(),
                        "constant series normalized to midpoint"
                    );
                }
                samples.iter().map(|&v| range.normalize(v)).collect()
            }
        };

        Ok(Self {
            raw: samples.to_vec(),
            values,
            range,
        })
    }

    /// Values the chart draws: normalized or raw depending on the scale.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    #[must_use]
    pub fn range(&self) -> SampleRange {
        self.range
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value of the last sample.
    #[must_use]
    pub fn last_raw(&self) -> f64 {
        self.raw[self.raw.len() - 1]
    }
}

/// Vertical mapping shared by area, discrete, smooth and the std-dev band.
///
/// The top 1px and bottom 3px are reserved so markers and strokes stay inside
/// the canvas: `height - 3 - n / (101 / (height - 4))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMapping {
    height: f64,
}

impl VerticalMapping {
    pub fn new(height: f64) -> SparklineResult<Self> {
        if !height.is_finite() || height <= 4.0 {
            return Err(SparklineError::invalid_option(
                "height",
                "must be finite and > 4 for line-based charts",
            ));
        }
        Ok(Self { height })
    }

    #[must_use]
    pub fn y_for(self, normalized: f64) -> f64 {
        self.height - 3.0 - self.rise(normalized)
    }

    /// Vertical travel in pixels for a normalized value.
    #[must_use]
    pub fn rise(self, normalized: f64) -> f64 {
        normalized / (101.0 / (self.height - 4.0))
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }
}

fn validate_samples(samples: &[f64]) -> SparklineResult<()> {
    if samples.is_empty() {
        return Err(SparklineError::EmptyData);
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(SparklineError::InvalidData(format!(
            "sample at index {index} must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_mapping_reserves_margins() {
        let mapping = VerticalMapping::new(14.0).expect("mapping");
        assert!((mapping.y_for(0.0) - 11.0).abs() <= 1e-12);
        assert!((mapping.y_for(101.0) - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn vertical_mapping_rejects_short_canvas() {
        assert!(VerticalMapping::new(4.0).is_err());
        assert!(VerticalMapping::new(f64::NAN).is_err());
    }

    #[test]
    fn non_finite_sample_is_reported_with_index() {
        let err = SampleRange::from_samples(&[1.0, f64::INFINITY]).expect_err("must fail");
        assert!(err.to_string().contains("index 1"));
    }
}
