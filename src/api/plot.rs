#[cfg(feature = "cairo-backend")]
use std::path::Path;

use crate::error::SparklineResult;
use crate::render::{EstimatedTextMetrics, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::{CairoRenderer, CairoTextMetrics, RasterImage};

use super::{Dispatcher, StyleConfig};

/// File name used when a caller has no better one.
pub const DEFAULT_OUTPUT_FILE: &str = "sparklines.png";

/// Builds the frame for `data` with estimated text metrics.
pub fn plot_frame(data: &[f64], config: &StyleConfig) -> SparklineResult<RenderFrame> {
    Dispatcher::new(EstimatedTextMetrics).build(data, config)
}

/// Builds the frame and hands it to `renderer`; returns the frame that was drawn.
pub fn plot_with<R: Renderer>(
    renderer: &mut R,
    data: &[f64],
    config: &StyleConfig,
) -> SparklineResult<RenderFrame> {
    let frame = plot_frame(data, config)?;
    renderer.render(&frame)?;
    Ok(frame)
}

/// Rasterizes a sparkline, measuring label text with the real font stack.
#[cfg(feature = "cairo-backend")]
pub fn plot_to_image(data: &[f64], config: &StyleConfig) -> SparklineResult<RasterImage> {
    let frame = Dispatcher::new(CairoTextMetrics::new()?).build(data, config)?;
    let mut renderer = CairoRenderer::for_frame(&frame)?;
    renderer.render(&frame)?;
    Ok(renderer.into_raster_image())
}

/// PNG-encoded sparkline.
#[cfg(feature = "cairo-backend")]
pub fn plot(data: &[f64], config: &StyleConfig) -> SparklineResult<Vec<u8>> {
    plot_to_image(data, config)?.to_png()
}

/// Writes the PNG-encoded sparkline to `path`.
#[cfg(feature = "cairo-backend")]
pub fn plot_to_file(
    path: impl AsRef<Path>,
    data: &[f64],
    config: &StyleConfig,
) -> SparklineResult<()> {
    let bytes = plot(data, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
