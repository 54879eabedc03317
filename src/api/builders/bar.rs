use crate::api::{ChartType, StyleConfig};
use crate::core::{NORMALIZED_MAX, NormalizedSeries};
use crate::error::SparklineResult;
use crate::render::{Color, RenderFrame};

use super::ChartBuilder;

/// One unstroked bar per sample, colored by the `upper` threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl ChartBuilder for BarChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Bar
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let step = config.step;
        let height = config.height;
        let values = series.values();
        let width = values.len() as f64 * step + 2.0;

        let mut frame = RenderFrame::new(width, height, config.background_color);
        frame.stroke(Color::TRANSPARENT);
        for (index, &value) in values.iter().enumerate() {
            let color = if value >= config.upper {
                config.above_color
            } else {
                config.below_color
            };
            let x = 1.0 + index as f64 * step;
            let top = height - value / NORMALIZED_MAX * height;
            frame.fill(color).rectangle(x, height, x + step - 2.0, top);
        }
        Ok(frame)
    }
}
