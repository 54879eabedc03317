use crate::api::{ChartType, StyleConfig};
use crate::core::{NormalizedSeries, Point, SampleRange, VerticalMapping};
use crate::error::SparklineResult;
use crate::render::RenderFrame;

use super::ChartBuilder;
use super::decorations::{
    closed_polygon_points, draw_extreme_markers, draw_std_dev_band, open_polyline,
};

/// Horizontal overhang of the target line past each canvas edge.
const TARGET_OVERHANG: f64 = 5.0;

/// Line chart, optionally filled underneath, with an optional target line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothChart;

impl SmoothChart {
    /// Data points at `x = i * step`.
    #[must_use]
    pub fn coords(values: &[f64], step: f64, mapping: VerticalMapping) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * step, mapping.y_for(v)))
            .collect()
    }

    /// Whole-pixel y of `target`, normalized against the data's own range.
    #[must_use]
    pub fn target_y(target: f64, range: SampleRange, mapping: VerticalMapping) -> f64 {
        mapping.y_for(range.normalize(target)).trunc()
    }
}

impl ChartBuilder for SmoothChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Smooth
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let mapping = VerticalMapping::new(config.height)?;
        let values = series.values();
        let height = config.height;
        let width = values.len().saturating_sub(1) as f64 * config.step;

        let mut frame = RenderFrame::new(width, height, config.background_color);
        if config.has_std_dev {
            draw_std_dev_band(&mut frame, values, mapping, width, config.std_dev_color);
        }

        frame.stroke(config.line_color);
        let coords = Self::coords(values, config.step, mapping);
        match config.underneath_color {
            Some(color) => {
                frame
                    .fill(color)
                    .polygon(closed_polygon_points(&coords, width, height));
            }
            None => open_polyline(&mut frame, &coords),
        }

        if let Some(target) = config.target {
            let y = Self::target_y(target, series.range(), mapping);
            frame.stroke(config.target_color).polyline(vec![
                Point::new(-TARGET_OVERHANG, y),
                Point::new(width + TARGET_OVERHANG, y),
            ]);
        }

        draw_extreme_markers(&mut frame, &coords, values, config, 2.0);
        Ok(frame)
    }
}
