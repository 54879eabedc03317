mod draw_op;
mod frame;
mod metrics;
mod null_renderer;
mod primitives;

pub use draw_op::{ClipRegion, DrawOp, WedgePath};
pub use frame::RenderFrame;
pub use metrics::{EstimatedTextMetrics, TextExtent, TextMetrics};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, TextHAlign};

pub(crate) use draw_op::ordered;

use crate::error::SparklineResult;

/// Canvas collaborator consuming a finished frame.
///
/// Builders never touch a backend; they hand a fully materialized
/// `RenderFrame` to whichever renderer the caller instantiated for this plot.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, CairoTextMetrics, RasterImage};
