use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ValueScale;

/// Closed set of recognized sparkline variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Area,
    Bar,
    Bullet,
    Discrete,
    Pie,
    Smooth,
    Whisker,
}

impl ChartType {
    pub const ALL: [Self; 7] = [
        Self::Area,
        Self::Bar,
        Self::Bullet,
        Self::Discrete,
        Self::Pie,
        Self::Smooth,
        Self::Whisker,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Bullet => "bullet",
            Self::Discrete => "discrete",
            Self::Pie => "pie",
            Self::Smooth => "smooth",
            Self::Whisker => "whisker",
        }
    }

    /// Exact, case-sensitive lookup of a configured type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|chart_type| chart_type.name() == name)
    }

    /// Pie and bullet read the raw value; every other type draws the 0..=100
    /// normalized series.
    #[must_use]
    pub const fn value_scale(self) -> ValueScale {
        match self {
            Self::Pie | Self::Bullet => ValueScale::Raw,
            _ => ValueScale::Normalized,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for chart_type in ChartType::ALL {
            assert_eq!(ChartType::from_name(chart_type.name()), Some(chart_type));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ChartType::from_name("Smooth"), None);
        assert_eq!(ChartType::from_name("nonexistent"), None);
    }
}
