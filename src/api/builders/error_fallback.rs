use crate::render::{Color, RenderFrame};

pub const ERROR_GLYPH_WIDTH: f64 = 40.0;
pub const ERROR_GLYPH_HEIGHT: f64 = 15.0;

/// Red "X" on white, drawn for an unrecognized chart type.
///
/// Not a [`super::ChartBuilder`]: it ignores data and style entirely, so a bad
/// configuration degrades to a visible glyph instead of failing the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorFallback;

impl ErrorFallback {
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(ERROR_GLYPH_WIDTH, ERROR_GLYPH_HEIGHT, Color::WHITE);
        frame
            .fill(Color::RED)
            .line(0.0, 0.0, ERROR_GLYPH_WIDTH, ERROR_GLYPH_HEIGHT)
            .line(0.0, ERROR_GLYPH_HEIGHT, ERROR_GLYPH_WIDTH, 0.0);
        frame
    }
}
