use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SparklineError, SparklineResult};
use crate::render::Color;

use super::StyleConfig;

/// One loosely typed option value as it arrives from a query string, a
/// template helper or a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Insertion-ordered option map, coerced into a [`StyleConfig`] once.
///
/// Later inserts of the same key replace earlier ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOptions {
    entries: IndexMap<String, OptionValue>,
}

impl StyleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses `key=value` pairs separated by `&`, the shape of an image-tag URL
    /// query. Keys and values are percent-decoded (`+` is a space); values stay
    /// textual and are coerced by [`StyleConfig::from_options`].
    pub fn from_query(query: &str) -> SparklineResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut options = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            if !pair.contains('=') {
                return Err(SparklineError::invalid_option(pair, "expected `key=value`"));
            }
            for (key, value) in form_urlencoded::parse(pair.as_bytes()) {
                options.insert(key.trim(), value.trim());
            }
        }
        Ok(options)
    }

    pub fn from_json_str(input: &str) -> SparklineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SparklineError::invalid_option("<json>", format!("failed to parse options: {e}"))
        })
    }
}

impl StyleConfig {
    /// Coerces a loose option map into a typed config on top of the defaults.
    ///
    /// Numeric strings become numbers and `"true"`/`"false"` become booleans;
    /// any other mismatch is an [`SparklineError::InvalidOption`]. Unknown keys
    /// are ignored.
    pub fn from_options(options: &StyleOptions) -> SparklineResult<Self> {
        let mut config = Self::default();
        for (key, value) in options.iter() {
            apply_option(&mut config, key, value)?;
        }
        Ok(config)
    }
}

impl TryFrom<&StyleOptions> for StyleConfig {
    type Error = SparklineError;

    fn try_from(options: &StyleOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

fn apply_option(config: &mut StyleConfig, key: &str, value: &OptionValue) -> SparklineResult<()> {
    match key {
        "type" => config.chart_type = as_text(key, value)?,
        "height" => config.height = as_number(key, value)?,
        "upper" => config.upper = as_number(key, value)?,
        "diameter" => config.diameter = as_number(key, value)?,
        "step" => config.step = as_number(key, value)?,
        "width" => config.width = Some(as_number(key, value)?),
        "target" => config.target = Some(as_number(key, value)?),
        "good" => config.good = Some(as_number(key, value)?),
        "bad" => config.bad = Some(as_number(key, value)?),
        "satisfactory" => config.satisfactory = Some(as_number(key, value)?),
        "font_size" => config.font_size = as_number(key, value)?,

        "has_min" => config.has_min = as_bool(key, value)?,
        "has_max" => config.has_max = as_bool(key, value)?,
        "has_last" => config.has_last = as_bool(key, value)?,
        "has_std_dev" => config.has_std_dev = as_bool(key, value)?,

        "label" => {
            let label = as_text(key, value)?;
            config.label = (!label.is_empty()).then_some(label);
        }
        "font" => config.font = Some(as_text(key, value)?),
        "underneath_color" => config.underneath_color = Some(as_color(key, value)?),

        _ => {
            if let Some(slot) = color_slot(config, key) {
                *slot = as_color(key, value)?;
            } else {
                trace!(option = key, "ignoring unrecognized style option");
            }
        }
    }
    Ok(())
}

fn color_slot<'a>(config: &'a mut StyleConfig, key: &str) -> Option<&'a mut Color> {
    let slot = match key {
        "line_color" => &mut config.line_color,
        "above_color" => &mut config.above_color,
        "below_color" => &mut config.below_color,
        "background_color" => &mut config.background_color,
        "share_color" => &mut config.share_color,
        "remain_color" => &mut config.remain_color,
        "min_color" => &mut config.min_color,
        "max_color" => &mut config.max_color,
        "last_color" => &mut config.last_color,
        "std_dev_color" => &mut config.std_dev_color,
        "target_color" => &mut config.target_color,
        "good_color" => &mut config.good_color,
        "satisfactory_color" => &mut config.satisfactory_color,
        "bad_color" => &mut config.bad_color,
        "bullet_color" => &mut config.bullet_color,
        "whisker_color" => &mut config.whisker_color,
        "exception_color" => &mut config.exception_color,
        _ => return None,
    };
    Some(slot)
}

fn as_number(key: &str, value: &OptionValue) -> SparklineResult<f64> {
    let number = match value {
        OptionValue::Number(number) => *number,
        OptionValue::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            SparklineError::invalid_option(key, format!("`{text}` is not a number"))
        })?,
        OptionValue::Bool(_) => {
            return Err(SparklineError::invalid_option(
                key,
                "expected a number, got a boolean",
            ));
        }
    };
    if !number.is_finite() {
        return Err(SparklineError::invalid_option(key, "must be finite"));
    }
    Ok(number)
}

fn as_bool(key: &str, value: &OptionValue) -> SparklineResult<bool> {
    match value {
        OptionValue::Bool(flag) => Ok(*flag),
        OptionValue::Text(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(SparklineError::invalid_option(
                key,
                format!("`{other}` is not a boolean"),
            )),
        },
        OptionValue::Number(_) => Err(SparklineError::invalid_option(
            key,
            "expected a boolean, got a number",
        )),
    }
}

fn as_text(key: &str, value: &OptionValue) -> SparklineResult<String> {
    match value {
        OptionValue::Text(text) => Ok(text.clone()),
        OptionValue::Number(number) => Ok(number.to_string()),
        OptionValue::Bool(_) => Err(SparklineError::invalid_option(
            key,
            "expected text, got a boolean",
        )),
    }
}

fn as_color(key: &str, value: &OptionValue) -> SparklineResult<Color> {
    match value {
        OptionValue::Text(text) => text
            .parse()
            .map_err(|_| SparklineError::invalid_option(key, format!("`{text}` is not a color"))),
        _ => Err(SparklineError::invalid_option(key, "expected a color string")),
    }
}
