use crate::api::{ChartType, StyleConfig};
use crate::core::{NormalizedSeries, Point, VerticalMapping};
use crate::error::SparklineResult;
use crate::render::{ClipRegion, Color, RenderFrame};

use super::ChartBuilder;
use super::decorations::draw_extreme_markers;

/// Two-tone filled area split at the `upper` threshold.
///
/// One polygon is painted twice under disjoint clip bands, so the part above
/// the threshold line takes `above_color` and the part below `below_color`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaChart;

impl AreaChart {
    /// Polygon outline: anchors at `threshold_y` on both canvas edges around
    /// the data points at `x = 2 + i * step`.
    #[must_use]
    pub fn outline(
        values: &[f64],
        step: f64,
        mapping: VerticalMapping,
        threshold_y: f64,
    ) -> Vec<Point> {
        let width = canvas_width(values.len(), step);
        let mut coords = Vec::with_capacity(values.len() + 2);
        coords.push(Point::new(0.0, threshold_y));
        coords.extend(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| Point::new(2.0 + i as f64 * step, mapping.y_for(v))),
        );
        coords.push(Point::new(width, threshold_y));
        coords
    }
}

impl ChartBuilder for AreaChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Area
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let mapping = VerticalMapping::new(config.height)?;
        let values = series.values();
        let width = canvas_width(values.len(), config.step);
        let height = config.height;
        let threshold_y = mapping.y_for(config.upper);

        let coords = Self::outline(values, config.step, mapping, threshold_y);
        let last = coords.len() - 1;

        let mut frame = RenderFrame::new(width, height, config.background_color);
        frame
            .fill(config.above_color)
            .clip(ClipRegion::new(0.0, 0.0, width, threshold_y))
            .polygon(coords.clone());
        frame
            .fill(config.below_color)
            .clip(ClipRegion::new(0.0, threshold_y, width, height))
            .polygon(coords.clone());
        frame
            .fill(Color::BLACK)
            .line(0.0, threshold_y, width, threshold_y);
        frame.reset_clip();

        draw_extreme_markers(&mut frame, &coords[1..last], values, config, 1.0);
        Ok(frame)
    }
}

fn canvas_width(count: usize, step: f64) -> f64 {
    count.saturating_sub(1) as f64 * step + 4.0
}
