use tracing::debug;

use crate::api::{ChartType, StyleConfig};
use crate::core::{NORMALIZED_MAX, NormalizedSeries, Point};
use crate::error::{SparklineError, SparklineResult};
use crate::render::{RenderFrame, WedgePath};

use super::ChartBuilder;

/// Gap between the pie and the canvas edge, in pixels.
const RIM: f64 = 2.0;

/// Single-percentage pie: a `remain_color` disc with a `share_color` wedge
/// starting at 3 o'clock and sweeping clockwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieChart;

impl PieChart {
    /// Wedge for `percent` on a pie of `radius` centered at `center`.
    ///
    /// `None` for the 0% and 100% cases, which have no wedge outline.
    #[must_use]
    pub fn wedge(percent: f64, center: f64, radius: f64) -> Option<WedgePath> {
        if percent <= 0.0 || percent >= NORMALIZED_MAX {
            return None;
        }
        let angle = (3.6 * percent).to_radians();
        Some(WedgePath {
            center: Point::new(center, center),
            radius,
            end: Point::new(center + radius * angle.cos(), center + radius * angle.sin()),
            large_arc_flag: u8::from(percent > 50.0),
            sweep_flag: 1,
        })
    }
}

impl ChartBuilder for PieChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Pie
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let diameter = config.diameter;
        let radius = diameter / 2.0 - RIM;
        if radius <= 0.0 {
            return Err(SparklineError::invalid_option(
                "diameter",
                format!("must be > {}", 2.0 * RIM),
            ));
        }
        let center = radius + RIM;

        let raw = series.values()[0];
        let percent = raw.clamp(0.0, NORMALIZED_MAX);
        if percent != raw || series.len() > 1 {
            debug!(
                raw,
                percent,
                ignored = series.len() - 1,
                "pie uses the first sample clamped to 0..=100"
            );
        }

        let mut frame = RenderFrame::new(diameter, diameter, config.background_color);
        frame
            .fill(config.remain_color)
            .ellipse_arc(center, center, radius, radius, 0.0, 360.0)
            .fill(config.share_color);

        if percent >= NORMALIZED_MAX {
            frame.ellipse_arc(center, center, radius, radius, 0.0, 360.0);
        } else if let Some(wedge) = Self::wedge(percent, center, radius) {
            frame.path(wedge);
        }
        Ok(frame)
    }
}
