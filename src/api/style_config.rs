use serde::{Deserialize, Serialize};

use crate::error::{SparklineError, SparklineResult};
use crate::render::Color;

use super::ChartType;

/// Horizontal gap between the chart, label and last value, in pixels.
pub const LABEL_MARGIN: f64 = 5.0;
/// Font size used for labels when `font_size` is not configured.
pub const DEFAULT_POINT_SIZE: f64 = 10.0;
/// Bullet canvas width when `width` is not configured.
pub const DEFAULT_BULLET_WIDTH: f64 = 100.0;

/// Immutable style for one plot invocation.
///
/// Every field has a documented default, so any subset of keys deserializes
/// into a complete config and unknown keys are ignored. `type` is kept as a
/// name: an unrecognized one is not an error here, the dispatcher renders the
/// error glyph for it instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(rename = "type", default = "default_chart_type")]
    pub chart_type: String,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_upper")]
    pub upper: f64,
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    #[serde(default = "default_step")]
    pub step: f64,

    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_above_color")]
    pub above_color: Color,
    #[serde(default = "default_below_color")]
    pub below_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_share_color")]
    pub share_color: Color,
    #[serde(default = "default_remain_color")]
    pub remain_color: Color,
    #[serde(default = "default_min_color")]
    pub min_color: Color,
    #[serde(default = "default_max_color")]
    pub max_color: Color,
    #[serde(default = "default_last_color")]
    pub last_color: Color,
    #[serde(default = "default_std_dev_color")]
    pub std_dev_color: Color,

    #[serde(default)]
    pub has_min: bool,
    #[serde(default)]
    pub has_max: bool,
    #[serde(default)]
    pub has_last: bool,
    #[serde(default)]
    pub has_std_dev: bool,

    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default = "default_target_color")]
    pub target_color: Color,
    #[serde(default)]
    pub underneath_color: Option<Color>,

    #[serde(default)]
    pub good: Option<f64>,
    #[serde(default)]
    pub bad: Option<f64>,
    #[serde(default)]
    pub satisfactory: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default = "default_good_color")]
    pub good_color: Color,
    #[serde(default = "default_satisfactory_color")]
    pub satisfactory_color: Color,
    #[serde(default = "default_bad_color")]
    pub bad_color: Color,
    #[serde(default = "default_bullet_color")]
    pub bullet_color: Color,

    #[serde(default = "default_whisker_color")]
    pub whisker_color: Color,
    #[serde(default = "default_exception_color")]
    pub exception_color: Color,

    #[serde(default)]
    pub font: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            chart_type: default_chart_type(),
            height: default_height(),
            upper: default_upper(),
            diameter: default_diameter(),
            step: default_step(),
            line_color: default_line_color(),
            above_color: default_above_color(),
            below_color: default_below_color(),
            background_color: default_background_color(),
            share_color: default_share_color(),
            remain_color: default_remain_color(),
            min_color: default_min_color(),
            max_color: default_max_color(),
            last_color: default_last_color(),
            std_dev_color: default_std_dev_color(),
            has_min: false,
            has_max: false,
            has_last: false,
            has_std_dev: false,
            label: None,
            target: None,
            target_color: default_target_color(),
            underneath_color: None,
            good: None,
            bad: None,
            satisfactory: None,
            width: None,
            good_color: default_good_color(),
            satisfactory_color: default_satisfactory_color(),
            bad_color: default_bad_color(),
            bullet_color: default_bullet_color(),
            whisker_color: default_whisker_color(),
            exception_color: default_exception_color(),
            font: None,
            font_size: default_font_size(),
        }
    }
}

impl StyleConfig {
    /// Default style for `chart_type`.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self::default().with_chart_type(chart_type)
    }

    /// Recognized chart type, `None` when the configured name is unknown.
    #[must_use]
    pub fn resolved_chart_type(&self) -> Option<ChartType> {
        ChartType::from_name(&self.chart_type)
    }

    pub fn from_json_str(input: &str) -> SparklineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SparklineError::invalid_option("<json>", format!("failed to parse style config: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> SparklineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SparklineError::invalid_option(
                "<json>",
                format!("failed to serialize style config: {e}"),
            )
        })
    }

    /// Checks the options every chart type depends on.
    ///
    /// Chart-specific requirements (`good` for bullet, `height > 4` for the
    /// line-based charts) are checked by the builders that need them.
    pub fn validate(&self) -> SparklineResult<()> {
        for (option, value) in [
            ("height", self.height),
            ("step", self.step),
            ("diameter", self.diameter),
            ("font_size", self.font_size),
        ] {
            require_positive(option, value)?;
        }
        if !self.upper.is_finite() {
            return Err(SparklineError::invalid_option("upper", "must be finite"));
        }
        if let Some(width) = self.width {
            require_positive("width", width)?;
        }
        for (option, value) in [
            ("target", self.target),
            ("good", self.good),
            ("bad", self.bad),
            ("satisfactory", self.satisfactory),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(SparklineError::invalid_option(option, "must be finite"));
            }
        }
        for color in [
            self.line_color,
            self.above_color,
            self.below_color,
            self.background_color,
            self.share_color,
            self.remain_color,
            self.min_color,
            self.max_color,
            self.last_color,
            self.std_dev_color,
            self.target_color,
            self.good_color,
            self.satisfactory_color,
            self.bad_color,
            self.bullet_color,
            self.whisker_color,
            self.exception_color,
        ] {
            color.validate()?;
        }
        if let Some(color) = self.underneath_color {
            color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type.name().to_owned();
        self
    }

    /// Sets the chart type by name; unknown names render the error glyph.
    #[must_use]
    pub fn with_chart_type_name(mut self, name: impl Into<String>) -> Self {
        self.chart_type = name.into();
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_upper(mut self, upper: f64) -> Self {
        self.upper = upper;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_threshold_colors(mut self, above: Color, below: Color) -> Self {
        self.above_color = above;
        self.below_color = below;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Toggles the min/max/last square markers.
    #[must_use]
    pub fn with_markers(mut self, has_min: bool, has_max: bool, has_last: bool) -> Self {
        self.has_min = has_min;
        self.has_max = has_max;
        self.has_last = has_last;
        self
    }

    #[must_use]
    pub fn with_std_dev_band(mut self, enabled: bool) -> Self {
        self.has_std_dev = enabled;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_target_color(mut self, color: Color) -> Self {
        self.target_color = color;
        self
    }

    #[must_use]
    pub fn with_underneath_color(mut self, color: Color) -> Self {
        self.underneath_color = Some(color);
        self
    }

    /// Bullet qualitative ranges; `good` is the full-scale value.
    #[must_use]
    pub fn with_bullet_ranges(
        mut self,
        good: f64,
        satisfactory: Option<f64>,
        bad: Option<f64>,
    ) -> Self {
        self.good = Some(good);
        self.satisfactory = satisfactory;
        self.bad = bad;
        self
    }

    #[must_use]
    pub fn with_whisker_colors(mut self, whisker: Color, exception: Color) -> Self {
        self.whisker_color = whisker;
        self.exception_color = exception;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>, font_size: f64) -> Self {
        self.font = Some(font.into());
        self.font_size = font_size;
        self
    }

    /// Effective `has_last`: a label always shows the last-value marker.
    #[must_use]
    pub fn shows_last_marker(&self) -> bool {
        self.has_last || self.label.as_deref().is_some_and(|label| !label.is_empty())
    }
}

fn require_positive(option: &str, value: f64) -> SparklineResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SparklineError::invalid_option(option, "must be finite and > 0"));
    }
    Ok(())
}

fn default_chart_type() -> String {
    ChartType::Smooth.name().to_owned()
}

fn default_height() -> f64 {
    14.0
}

fn default_upper() -> f64 {
    50.0
}

fn default_diameter() -> f64 {
    20.0
}

fn default_step() -> f64 {
    2.0
}

fn default_line_color() -> Color {
    Color::LIGHT_GREY
}

fn default_above_color() -> Color {
    Color::RED
}

fn default_below_color() -> Color {
    Color::GREY
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_share_color() -> Color {
    Color::RED
}

fn default_remain_color() -> Color {
    Color::LIGHT_GREY
}

fn default_min_color() -> Color {
    Color::BLUE
}

fn default_max_color() -> Color {
    Color::GREEN
}

fn default_last_color() -> Color {
    Color::RED
}

fn default_std_dev_color() -> Color {
    Color::from_rgb8(0xef, 0xef, 0xef)
}

fn default_target_color() -> Color {
    Color::WHITE
}

fn default_good_color() -> Color {
    Color::from_rgb8(0xee, 0xee, 0xee)
}

fn default_satisfactory_color() -> Color {
    Color::from_rgb8(0xbb, 0xbb, 0xbb)
}

fn default_bad_color() -> Color {
    Color::from_rgb8(0x99, 0x99, 0x99)
}

fn default_bullet_color() -> Color {
    Color::BLACK
}

fn default_whisker_color() -> Color {
    Color::BLACK
}

fn default_exception_color() -> Color {
    Color::RED
}

fn default_font_size() -> f64 {
    DEFAULT_POINT_SIZE
}
