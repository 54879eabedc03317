use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{SparklineError, SparklineResult};
use crate::render::{Color, TextHAlign};

/// Rectangular mask restricting where later shapes may paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRegion {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ClipRegion {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        let (left, right) = ordered(self.x0, self.x1);
        let (top, bottom) = ordered(self.y0, self.y1);
        (left..=right).contains(&point.x) && (top..=bottom).contains(&point.y)
    }
}

/// Pie wedge: move to center, run right to the rim, arc to `end`, close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgePath {
    pub center: Point,
    pub radius: f64,
    pub end: Point,
    /// `1` when the arc spans more than half the circle.
    pub large_arc_flag: u8,
    pub sweep_flag: u8,
}

impl WedgePath {
    /// Angle of `end` around `center`, in radians within `[0, 2π)`.
    #[must_use]
    pub fn end_angle(self) -> f64 {
        let angle = (self.end.y - self.center.y).atan2(self.end.x - self.center.x);
        angle.rem_euclid(std::f64::consts::TAU)
    }

    /// SVG path-data form, e.g. `M10,10 h8 A8,8 0 0,1 10,18 z`.
    #[must_use]
    pub fn to_svg_path(self) -> String {
        format!(
            "M{},{} h{} A{},{} 0 {},{} {},{} z",
            self.center.x,
            self.center.y,
            self.radius,
            self.radius,
            self.radius,
            self.large_arc_flag,
            self.sweep_flag,
            self.end.x,
            self.end.y
        )
    }
}

/// One abstract drawing instruction.
///
/// Order is significant: later ops paint over earlier ones, and `Fill`/`Stroke`
/// set the paint used by every shape that follows until changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Fill(Color),
    Stroke(Color),
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    Polyline(Vec<Point>),
    Polygon(Vec<Point>),
    Rectangle {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    EllipseArc {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start_deg: f64,
        end_deg: f64,
    },
    Path(WedgePath),
    Clip(ClipRegion),
    ResetClip,
    /// `x` is the anchor given by `h_align`; `y` is the vertical centre of the text.
    TextAnnotation {
        text: String,
        x: f64,
        y: f64,
        color: Color,
        font: Option<String>,
        font_size: f64,
        h_align: TextHAlign,
    },
}

impl DrawOp {
    /// Short tag used by logs and renderer statistics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fill(_) => "fill",
            Self::Stroke(_) => "stroke",
            Self::Line { .. } => "line",
            Self::Polyline(_) => "polyline",
            Self::Polygon(_) => "polygon",
            Self::Rectangle { .. } => "rectangle",
            Self::EllipseArc { .. } => "ellipse_arc",
            Self::Path(_) => "path",
            Self::Clip(_) => "clip",
            Self::ResetClip => "reset_clip",
            Self::TextAnnotation { .. } => "text_annotation",
        }
    }

    pub fn validate(&self) -> SparklineResult<()> {
        let finite = match self {
            Self::Fill(color) | Self::Stroke(color) => return color.validate(),
            Self::Line { x0, y0, x1, y1 } | Self::Rectangle { x0, y0, x1, y1 } => {
                [x0, y0, x1, y1].iter().all(|v| v.is_finite())
            }
            Self::Polyline(points) | Self::Polygon(points) => {
                if points.len() < 2 {
                    return Err(SparklineError::InvalidData(format!(
                        "{} needs at least two points",
                        self.kind()
                    )));
                }
                points.iter().all(|p| p.is_finite())
            }
            Self::EllipseArc {
                cx,
                cy,
                rx,
                ry,
                start_deg,
                end_deg,
            } => {
                if *rx < 0.0 || *ry < 0.0 {
                    return Err(SparklineError::InvalidData(
                        "ellipse radii must be >= 0".to_owned(),
                    ));
                }
                [cx, cy, rx, ry, start_deg, end_deg]
                    .iter()
                    .all(|v| v.is_finite())
            }
            Self::Path(wedge) => {
                wedge.center.is_finite() && wedge.end.is_finite() && wedge.radius.is_finite()
            }
            Self::Clip(region) => [region.x0, region.y0, region.x1, region.y1]
                .iter()
                .all(|v| v.is_finite()),
            Self::ResetClip => true,
            Self::TextAnnotation {
                text,
                x,
                y,
                color,
                font_size,
                ..
            } => {
                if text.is_empty() {
                    return Err(SparklineError::InvalidData(
                        "text annotation must not be empty".to_owned(),
                    ));
                }
                if !font_size.is_finite() || *font_size <= 0.0 {
                    return Err(SparklineError::InvalidData(
                        "font size must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()?;
                x.is_finite() && y.is_finite()
            }
        };

        if finite {
            Ok(())
        } else {
            Err(SparklineError::InvalidData(format!(
                "{} coordinates must be finite",
                self.kind()
            )))
        }
    }
}

pub(crate) fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_svg_path_matches_path_grammar() {
        let wedge = WedgePath {
            center: Point::new(10.0, 10.0),
            radius: 8.0,
            end: Point::new(10.0, 18.0),
            large_arc_flag: 0,
            sweep_flag: 1,
        };
        assert_eq!(wedge.to_svg_path(), "M10,10 h8 A8,8 0 0,1 10,18 z");
        assert!((wedge.end_angle() - std::f64::consts::FRAC_PI_2).abs() <= 1e-12);
    }

    #[test]
    fn clip_region_accepts_reversed_corners() {
        let region = ClipRegion::new(10.0, 10.0, 0.0, 0.0);
        assert!(region.contains(Point::new(5.0, 5.0)));
        assert!(!region.contains(Point::new(11.0, 5.0)));
    }

    #[test]
    fn polyline_needs_two_points() {
        let op = DrawOp::Polyline(vec![Point::new(0.0, 0.0)]);
        assert!(op.validate().is_err());
    }
}
