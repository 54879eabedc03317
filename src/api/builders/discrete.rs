use crate::api::{ChartType, StyleConfig};
use crate::core::{NormalizedSeries, VerticalMapping};
use crate::error::SparklineResult;
use crate::render::RenderFrame;

use super::ChartBuilder;
use super::decorations::draw_std_dev_band;

/// Tick length of each discrete sample, in pixels.
const TICK_LENGTH: f64 = 4.0;

/// One short vertical tick per sample, colored by the `upper` threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteChart;

impl ChartBuilder for DiscreteChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Discrete
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let mapping = VerticalMapping::new(config.height)?;
        let step = config.step;
        let height = config.height;
        let values = series.values();
        let width = values.len() as f64 * step - 1.0;

        let mut frame = RenderFrame::new(width, height, config.background_color);
        if config.has_std_dev {
            draw_std_dev_band(&mut frame, values, mapping, width, config.std_dev_color);
        }

        for (index, &value) in values.iter().enumerate() {
            let color = if value >= config.upper {
                config.above_color
            } else {
                config.below_color
            };
            let x = index as f64 * step;
            let bottom = height - mapping.rise(value);
            frame.stroke(color).line(x, bottom - TICK_LENGTH, x, bottom);
        }
        Ok(frame)
    }
}
