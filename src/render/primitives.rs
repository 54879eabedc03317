use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SparklineError, SparklineResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a string (`"red"`, `"#efefef"`, `"transparent"`), the same
/// spelling option maps and config files use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    pub const GREY: Self = Self::from_rgb8(128, 128, 128);
    pub const LIGHT_GREY: Self = Self::from_rgb8(211, 211, 211);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 255)
    }

    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    pub fn validate(self) -> SparklineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SparklineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = [self.red, self.green, self.blue, self.alpha]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("grey", Color::GREY),
    ("gray", Color::GREY),
    ("lightgrey", Color::LIGHT_GREY),
    ("lightgray", Color::LIGHT_GREY),
    ("darkgrey", Color::from_rgb8(169, 169, 169)),
    ("darkgray", Color::from_rgb8(169, 169, 169)),
    ("silver", Color::from_rgb8(192, 192, 192)),
    ("yellow", Color::from_rgb8(255, 255, 0)),
    ("orange", Color::from_rgb8(255, 165, 0)),
    ("purple", Color::from_rgb8(128, 0, 128)),
    ("navy", Color::from_rgb8(0, 0, 128)),
    ("teal", Color::from_rgb8(0, 128, 128)),
    ("maroon", Color::from_rgb8(128, 0, 0)),
    ("olive", Color::from_rgb8(128, 128, 0)),
    ("lime", Color::from_rgb8(0, 255, 0)),
    ("aqua", Color::from_rgb8(0, 255, 255)),
    ("cyan", Color::from_rgb8(0, 255, 255)),
    ("fuchsia", Color::from_rgb8(255, 0, 255)),
    ("magenta", Color::from_rgb8(255, 0, 255)),
    ("pink", Color::from_rgb8(255, 192, 203)),
    ("brown", Color::from_rgb8(165, 42, 42)),
    ("steelblue", Color::from_rgb8(70, 130, 180)),
    ("lightblue", Color::from_rgb8(173, 216, 230)),
    ("lightgreen", Color::from_rgb8(144, 238, 144)),
    ("darkgreen", Color::from_rgb8(0, 100, 0)),
    ("darkred", Color::from_rgb8(139, 0, 0)),
    ("whitesmoke", Color::from_rgb8(245, 245, 245)),
    ("gainsboro", Color::from_rgb8(220, 220, 220)),
    ("transparent", Color::TRANSPARENT),
    ("none", Color::TRANSPARENT),
];

impl FromStr for Color {
    type Err = SparklineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let lowered = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, color)| *color)
            .ok_or_else(|| invalid_color(input))
    }
}

impl TryFrom<String> for Color {
    type Error = SparklineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    match hex.len() {
        3 => {
            let [r, g, b] = [nibble(0)?, nibble(1)?, nibble(2)?];
            Some(Color::from_rgb8(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn invalid_color(input: &str) -> SparklineError {
    SparklineError::InvalidData(format!("unrecognized color `{input}`"))
}

/// Horizontal text anchoring relative to an annotation's `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        let short: Color = "#eee".parse().expect("short hex");
        let long: Color = "#eeeeee".parse().expect("long hex");
        assert_eq!(short, long);
        assert_eq!(long.to_hex(), "#eeeeee");
    }

    #[test]
    fn names_are_case_insensitive() {
        let color: Color = "LightGrey".parse().expect("named");
        assert_eq!(color, Color::LIGHT_GREY);
    }

    #[test]
    fn rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn transparent_keeps_alpha_in_hex() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }
}
