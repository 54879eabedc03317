use crate::api::{ChartType, DEFAULT_BULLET_WIDTH, StyleConfig};
use crate::core::NormalizedSeries;
use crate::error::{SparklineError, SparklineResult};
use crate::render::RenderFrame;

use super::ChartBuilder;

/// Width of the target marker, in pixels.
const TARGET_BAR_WIDTH: f64 = 1.0;

/// Bullet graph: qualitative bands, an optional target marker and the
/// measure bar, all scaled against `good`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletChart;

impl BulletChart {
    /// Horizontal pixel position of `value` on a `width`-wide bullet.
    #[must_use]
    pub fn scale_x(value: f64, good: f64, width: f64) -> f64 {
        width * (value / good)
    }
}

impl ChartBuilder for BulletChart {
    fn chart_type(&self) -> ChartType {
        ChartType::Bullet
    }

    fn build(
        &self,
        series: &NormalizedSeries,
        config: &StyleConfig,
    ) -> SparklineResult<RenderFrame> {
        let good = config.good.ok_or(SparklineError::MissingOption {
            option: "good",
            chart_type: "bullet",
        })?;
        if !good.is_finite() || good <= 0.0 {
            return Err(SparklineError::invalid_option("good", "must be finite and > 0"));
        }

        let width = config.width.unwrap_or(DEFAULT_BULLET_WIDTH);
        let height = config.height;
        let thickness = height / 3.0;
        let value = series.values()[0];

        let mut frame = RenderFrame::new(width, height, config.good_color);

        // Bad is drawn last so it covers the left part of satisfactory.
        for (indicator, color) in [
            (config.satisfactory, config.satisfactory_color),
            (config.bad, config.bad_color),
        ] {
            if let Some(indicator) = indicator {
                let right = Self::scale_x(indicator, good, width).trunc();
                frame.fill(color).rectangle(0.0, 0.0, right, height);
            }
        }

        if let Some(target) = config.target {
            let x = Self::scale_x(target, good, width);
            let half_thickness = (thickness / 2.0).trunc();
            frame.fill(config.bullet_color).rectangle(
                x.trunc(),
                half_thickness,
                (x + TARGET_BAR_WIDTH).trunc(),
                thickness * 2.0 + half_thickness,
            );
        }

        frame.fill(config.bullet_color).rectangle(
            0.0,
            thickness.trunc(),
            Self::scale_x(value, good, width),
            (thickness * 2.0).trunc(),
        );
        Ok(frame)
    }
}
