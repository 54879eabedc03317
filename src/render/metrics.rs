use crate::error::SparklineResult;

/// Pixel extent of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Text-measurement collaborator used by label layout.
///
/// Rasterizing backends implement this with their real font stack so reserved
/// label space matches what they later draw.
pub trait TextMetrics {
    fn measure(&self, text: &str, font: Option<&str>, font_size: f64)
    -> SparklineResult<TextExtent>;
}

/// Deterministic, backend-independent width estimate.
///
/// Per-glyph advance ratios approximate a proportional sans face; height is
/// the font size. Used for headless frame building and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMetrics;

impl EstimatedTextMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextMetrics for EstimatedTextMetrics {
    fn measure(
        &self,
        text: &str,
        _font: Option<&str>,
        font_size: f64,
    ) -> SparklineResult<TextExtent> {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'i' | 'l' | 'j' | 'I' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.86,
                _ => 0.58,
            }
        });
        Ok(TextExtent {
            width: units * font_size,
            height: font_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_scales_with_font_size() {
        let metrics = EstimatedTextMetrics::new();
        let small = metrics.measure("42", None, 10.0).expect("measure");
        let large = metrics.measure("42", None, 20.0).expect("measure");
        assert!((small.width - 12.4).abs() <= 1e-9);
        assert!((large.width - 2.0 * small.width).abs() <= 1e-9);
        assert!((large.height - 20.0).abs() <= 1e-9);
    }
}
