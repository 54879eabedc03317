//! Per-type chart geometry.
//!
//! Each builder turns a prepared series and a style into a [`RenderFrame`]
//! covering the chart area only; label space is added afterwards by
//! [`super::LabelLayout`].

mod area;
mod bar;
mod bullet;
mod decorations;
mod discrete;
mod error_fallback;
mod pie;
mod smooth;
mod whisker;

pub use area::AreaChart;
pub use bar::BarChart;
pub use bullet::BulletChart;
pub use decorations::{StdDevBand, closed_polygon_points, std_dev_band};
pub use discrete::DiscreteChart;
pub use error_fallback::{ERROR_GLYPH_HEIGHT, ERROR_GLYPH_WIDTH, ErrorFallback};
pub use pie::PieChart;
pub use smooth::SmoothChart;
pub use whisker::{WhiskerChart, WhiskerState};

use crate::core::NormalizedSeries;
use crate::error::SparklineResult;
use crate::render::RenderFrame;

use super::{ChartType, StyleConfig};

/// Geometry routine for one chart variant.
pub trait ChartBuilder: Sync {
    fn chart_type(&self) -> ChartType;

    fn build(&self, series: &NormalizedSeries, config: &StyleConfig)
    -> SparklineResult<RenderFrame>;
}
