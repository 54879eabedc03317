use crate::api::{ChartType, StyleConfig};
use crate::core::NormalizedSeries;
use crate::error::{SparklineError, SparklineResult};
use crate::render::RenderFrame;

use super::ChartBuilder;

/// Five-state on/off signal encoded by one whisker sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiskerState {
    ExceptionalDown,
    Down,
    Tie,
    Up,
    ExceptionalUp,
}

impl WhiskerState {
    pub fn from_value(value: f64) -> SparklineResult<Self> {
        let state = match value {
            v if v == -2.0 => Self::ExceptionalDown,
            v if v == -1.0 => Self::Down,
            v if v == 0.0 => Self::Tie,
            v if v == 1.0 => Self::Up,
            v if v == 2.0 => Self::ExceptionalUp,
            other => {
                return Err(SparklineError::InvalidData(format!(
                    "whisker value {other} is not one of -2, -1, 0, 1, 2"
                )));
            }
        };
        Ok(state)
    }

    #[must_use]
    pub fn is_exceptional(self) -> bool {
        matches!(self, Self::ExceptionalDown | Self::ExceptionalUp)
    }

    #[must_use]
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up | Self::ExceptionalUp)
    }
}

/// Row of up/down whiskers around the vertical midline.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiskerChart;

impl WhiskerChart {
    /// `(on_row, off_row)`: where up and down whiskers start for `rows` pixel rows.
    #[must_use]
    pub fn midline_rows(rows: f64) -> (f64, f64) {
        ((rows / 2.0 - 1.0).ceil(), (rows / 2.0).floor())
    }
}

impl ChartBuilder for WhiskerChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Whisker
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let step = config.step.trunc();
        if step < 1.0 {
            return Err(SparklineError::invalid_option(
                "step",
                "whisker step must be at least 1 pixel",
            ));
        }
        let states = series
            .raw()
            .iter()
            .map(|&v| WhiskerState::from_value(v))
            .collect::<SparklineResult<Vec<_>>>()?;

        let rows = config.height.trunc();
        let width = states.len() as f64 * step - 1.0;
        let (on_row, off_row) = Self::midline_rows(rows);

        let mut frame = RenderFrame::new(width, config.height, config.background_color);
        for (index, state) in states.into_iter().enumerate() {
            if state == WhiskerState::Tie {
                continue;
            }
            let color = if state.is_exceptional() {
                config.exception_color
            } else {
                config.whisker_color
            };
            let (start, end) = if state.is_up() {
                (on_row, 0.0)
            } else {
                (off_row, rows)
            };
            let x = index as f64 * step;
            frame.stroke(color).line(x, start, x, end);
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midline_rows_split_even_and_odd_heights() {
        assert_eq!(WhiskerChart::midline_rows(14.0), (6.0, 7.0));
        assert_eq!(WhiskerChart::midline_rows(15.0), (7.0, 7.0));
    }

    #[test]
    fn fractional_values_are_rejected() {
        assert!(WhiskerState::from_value(0.5).is_err());
        assert!(WhiskerState::from_value(3.0).is_err());
        assert_eq!(
            WhiskerState::from_value(-2.0).expect("state"),
            WhiskerState::ExceptionalDown
        );
    }
}
