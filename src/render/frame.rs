use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Point};
use crate::error::{SparklineError, SparklineResult};
use crate::render::{ClipRegion, Color, DrawOp, TextHAlign, WedgePath};

/// Backend-agnostic result of one plot invocation.
///
/// Holds the canvas size, its background and the ordered draw ops. The
/// canvas-contract methods (`fill`, `line`, `clip`, ...) append ops in call
/// order so builders read like drawing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub background_color: Color,
    pub ops: Vec<DrawOp>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(width: f64, height: f64, background_color: Color) -> Self {
        Self {
            width,
            height,
            background_color,
            ops: Vec::new(),
        }
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.push(DrawOp::Fill(color))
    }

    pub fn stroke(&mut self, color: Color) -> &mut Self {
        self.push(DrawOp::Stroke(color))
    }

    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> &mut Self {
        self.push(DrawOp::Line { x0, y0, x1, y1 })
    }

    pub fn polyline(&mut self, points: Vec<Point>) -> &mut Self {
        self.push(DrawOp::Polyline(points))
    }

    pub fn polygon(&mut self, points: Vec<Point>) -> &mut Self {
        self.push(DrawOp::Polygon(points))
    }

    pub fn rectangle(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> &mut Self {
        self.push(DrawOp::Rectangle { x0, y0, x1, y1 })
    }

    pub fn ellipse_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start_deg: f64,
        end_deg: f64,
    ) -> &mut Self {
        self.push(DrawOp::EllipseArc {
            cx,
            cy,
            rx,
            ry,
            start_deg,
            end_deg,
        })
    }

    pub fn path(&mut self, wedge: WedgePath) -> &mut Self {
        self.push(DrawOp::Path(wedge))
    }

    pub fn clip(&mut self, region: ClipRegion) -> &mut Self {
        self.push(DrawOp::Clip(region))
    }

    pub fn reset_clip(&mut self) -> &mut Self {
        self.push(DrawOp::ResetClip)
    }

    pub fn annotate(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        color: Color,
        font: Option<String>,
        font_size: f64,
    ) -> &mut Self {
        self.push(DrawOp::TextAnnotation {
            text: text.into(),
            x,
            y,
            color,
            font,
            font_size,
            h_align: TextHAlign::Left,
        })
    }

    pub fn push(&mut self, op: DrawOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Ops whose `kind()` equals `kind`, in draw order.
    pub fn ops_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DrawOp> + 'a {
        self.ops.iter().filter(move |op| op.kind() == kind)
    }

    #[must_use]
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn validate(&self) -> SparklineResult<()> {
        if !self.size().is_valid() {
            return Err(SparklineError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        self.background_color.validate()?;
        for op in &self.ops {
            op.validate()?;
        }
        Ok(())
    }
}
