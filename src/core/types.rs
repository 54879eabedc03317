use serde::{Deserialize, Serialize};

/// Pixel-space coordinate on a sparkline canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Canvas dimensions in (possibly fractional) pixels.
///
/// Chart widths derive from `step` and sample count, so they are kept as `f64`
/// until a rasterizer rounds them up to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whole-pixel surface size used by rasterizers.
    #[must_use]
    pub fn pixel_size(self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}
