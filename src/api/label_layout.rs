use crate::error::SparklineResult;
use crate::render::{Color, DrawOp, RenderFrame, TextHAlign, TextMetrics};

use super::{LABEL_MARGIN, StyleConfig};

/// Margin multiples reserved around label and last value.
const RESERVED_MARGINS: f64 = 7.0;

/// Reserved space and anchors for a trailing label and last value.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub label_width: f64,
    pub last_value_width: f64,
    /// Width added to the chart canvas.
    pub extension: f64,
    pub label_x: f64,
    pub last_value_x: f64,
    pub center_y: f64,
    pub last_value_text: String,
}

/// Widens a chart frame and annotates it with a label and the last sample.
#[derive(Clone, Copy)]
pub struct LabelLayout<'a> {
    metrics: &'a dyn TextMetrics,
}

impl<'a> LabelLayout<'a> {
    #[must_use]
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }

    /// Computes where label and last value go on a chart `chart_width` wide.
    pub fn place(
        &self,
        label: &str,
        last_value: f64,
        chart_width: f64,
        height: f64,
        config: &StyleConfig,
    ) -> SparklineResult<LabelPlacement> {
        let font = config.font.as_deref();
        let font_size = config.font_size;
        let last_value_text = format_sample(last_value);

        let label_width = self.metrics.measure(label, font, font_size)?.width;
        let last_value_width = self.metrics.measure(&last_value_text, font, font_size)?.width;
        let caps_height = self.metrics.measure("X", font, font_size)?.height;

        let extension = label_width + last_value_width + LABEL_MARGIN * RESERVED_MARGINS;
        let total_width = chart_width + extension;

        Ok(LabelPlacement {
            label_width,
            last_value_width,
            extension,
            label_x: total_width - extension + LABEL_MARGIN,
            last_value_x: total_width - last_value_width - LABEL_MARGIN * 2.0,
            center_y: height - caps_height / 2.0,
            last_value_text,
        })
    }

    /// Extends `frame` to the right and emits the two annotations ahead of the
    /// chart ops (label in black, last value in red).
    pub fn apply(
        &self,
        frame: &mut RenderFrame,
        label: &str,
        last_value: f64,
        config: &StyleConfig,
    ) -> SparklineResult<LabelPlacement> {
        let placement = self.place(label, last_value, frame.width, frame.height, config)?;
        frame.width += placement.extension;

        let annotations = [
            (label.to_owned(), placement.label_x, Color::BLACK),
            (
                placement.last_value_text.clone(),
                placement.last_value_x,
                Color::RED,
            ),
        ]
        .map(|(text, x, color)| DrawOp::TextAnnotation {
            text,
            x,
            y: placement.center_y,
            color,
            font: config.font.clone(),
            font_size: config.font_size,
            h_align: TextHAlign::Left,
        });
        frame.ops.splice(0..0, annotations);

        Ok(placement)
    }
}

/// Display form of a sample for the last-value annotation.
#[must_use]
pub fn format_sample(value: f64) -> String {
    value.to_string()
}
