use std::io::Write;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::trace;

use crate::core::Point;
use crate::error::{SparklineError, SparklineResult};
use crate::render::{
    ClipRegion, Color, DrawOp, RenderFrame, Renderer, TextExtent, TextHAlign, TextMetrics,
    WedgePath, ordered,
};

const DEFAULT_FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub shapes_filled: usize,
    pub texts_drawn: usize,
    pub clips_applied: usize,
}

/// Current paint, mirroring the `fill`/`stroke` state of the draw-op stream.
#[derive(Debug, Clone, Copy)]
struct PaintState {
    fill: Color,
    stroke: Option<Color>,
}

impl PaintState {
    /// Open strokes (lines, polylines) use the stroke paint once one has been
    /// set, otherwise the fill paint.
    fn line_color(self) -> Color {
        self.stroke.unwrap_or(self.fill)
    }
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: None,
        }
    }
}

/// Cairo + Pango rasterizer for sparkline frames.
///
/// One renderer owns one offscreen ARGB32 surface; it is created per plot and
/// turned into a [`RasterImage`] once the frame is drawn.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SparklineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SparklineError::InvalidCanvas {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Surface sized to the frame, fractional dimensions rounded up.
    pub fn for_frame(frame: &RenderFrame) -> SparklineResult<Self> {
        frame.validate()?;
        let (width, height) = frame.size().pixel_size();
        let width = i32::try_from(width).map_err(|_| oversized(frame))?;
        let height = i32::try_from(height).map_err(|_| oversized(frame))?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    #[must_use]
    pub fn into_raster_image(self) -> RasterImage {
        RasterImage {
            surface: self.surface,
        }
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> SparklineResult<()> {
        frame.validate()?;

        apply_color(context, frame.background_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint background", err))?;
        context.set_line_width(1.0);

        let mut paint = PaintState::default();
        let mut stats = CairoRenderStats::default();

        for op in &frame.ops {
            trace!(kind = op.kind(), "rasterize draw op");
            match op {
                DrawOp::Fill(color) => paint.fill = *color,
                DrawOp::Stroke(color) => paint.stroke = Some(*color),
                DrawOp::Line { x0, y0, x1, y1 } => {
                    context.move_to(*x0, *y0);
                    context.line_to(*x1, *y1);
                    stroke_open_path(context, paint.line_color())?;
                    stats.lines_drawn += 1;
                }
                DrawOp::Polyline(points) => {
                    append_points(context, points);
                    stroke_open_path(context, paint.line_color())?;
                    stats.lines_drawn += points.len().saturating_sub(1);
                }
                DrawOp::Polygon(points) => {
                    append_points(context, points);
                    context.close_path();
                    fill_and_outline(context, paint)?;
                    stats.shapes_filled += 1;
                }
                DrawOp::Rectangle { x0, y0, x1, y1 } => {
                    append_rect(context, ClipRegion::new(*x0, *y0, *x1, *y1));
                    fill_and_outline(context, paint)?;
                    stats.shapes_filled += 1;
                }
                DrawOp::EllipseArc {
                    cx,
                    cy,
                    rx,
                    ry,
                    start_deg,
                    end_deg,
                } => {
                    append_ellipse(context, *cx, *cy, *rx, *ry, *start_deg, *end_deg)?;
                    fill_and_outline(context, paint)?;
                    stats.shapes_filled += 1;
                }
                DrawOp::Path(wedge) => {
                    append_wedge(context, *wedge);
                    fill_and_outline(context, paint)?;
                    stats.shapes_filled += 1;
                }
                DrawOp::Clip(region) => {
                    context.reset_clip();
                    append_rect(context, *region);
                    context.clip();
                    stats.clips_applied += 1;
                }
                DrawOp::ResetClip => context.reset_clip(),
                DrawOp::TextAnnotation {
                    text,
                    x,
                    y,
                    color,
                    font,
                    font_size,
                    h_align,
                } => {
                    let layout = pangocairo::functions::create_layout(context);
                    layout.set_font_description(Some(&font_description(
                        font.as_deref(),
                        *font_size,
                    )));
                    layout.set_text(text);

                    let (text_width, text_height) = layout.pixel_size();
                    let (left, top) = text_origin(
                        *h_align,
                        *x,
                        *y,
                        f64::from(text_width),
                        f64::from(text_height),
                    );

                    apply_color(context, *color);
                    context.move_to(left, top);
                    pangocairo::functions::show_layout(context, &layout);
                    context.new_path();
                    stats.texts_drawn += 1;
                }
            }
        }

        context.reset_clip();
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SparklineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

/// Rasterized sparkline.
#[derive(Debug)]
pub struct RasterImage {
    surface: ImageSurface,
}

impl RasterImage {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width().unsigned_abs()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height().unsigned_abs()
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> SparklineResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| SparklineError::Backend(format!("failed to encode png: {err}")))
    }

    pub fn to_png(&self) -> SparklineResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_png(&mut bytes)?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> SparklineResult<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_png(&mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Un-premultiplied RGBA of one pixel, `None` outside the surface.
    pub fn pixel_rgba(&mut self, x: u32, y: u32) -> SparklineResult<Option<[u8; 4]>> {
        if x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        self.surface.flush();
        let stride = usize::try_from(self.surface.stride())
            .map_err(|_| SparklineError::Backend("negative surface stride".to_owned()))?;
        let data = self
            .surface
            .data()
            .map_err(|err| SparklineError::Backend(format!("surface data unavailable: {err}")))?;

        let offset = y as usize * stride + x as usize * 4;
        let argb = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let alpha = (argb >> 24) as u8;
        let unpremultiply = |channel: u32| -> u8 {
            if alpha == 0 {
                0
            } else {
                ((channel & 0xff) * 255 / u32::from(alpha)).min(255) as u8
            }
        };
        Ok(Some([
            unpremultiply(argb >> 16),
            unpremultiply(argb >> 8),
            unpremultiply(argb),
            alpha,
        ]))
    }
}

/// Pango-backed text measurement matching what [`CairoRenderer`] draws.
#[derive(Debug)]
pub struct CairoTextMetrics {
    context: Context,
}

impl CairoTextMetrics {
    pub fn new() -> SparklineResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create metrics surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create metrics context", err))?;
        Ok(Self { context })
    }
}

impl TextMetrics for CairoTextMetrics {
    fn measure(
        &self,
        text: &str,
        font: Option<&str>,
        font_size: f64,
    ) -> SparklineResult<TextExtent> {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font, font_size)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        Ok(TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        })
    }
}

fn font_description(font: Option<&str>, font_size: f64) -> FontDescription {
    let mut description = FontDescription::from_string(font.unwrap_or(DEFAULT_FONT_FAMILY));
    description.set_absolute_size(font_size * f64::from(pango::SCALE));
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Top-left corner of a text layout whose vertical centre sits on `y`.
fn text_origin(h_align: TextHAlign, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let left = match h_align {
        TextHAlign::Left => x,
        TextHAlign::Center => x - width / 2.0,
        TextHAlign::Right => x - width,
    };
    (left, y - height / 2.0)
}

fn append_points(context: &Context, points: &[Point]) {
    context.new_path();
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            context.move_to(point.x, point.y);
        } else {
            context.line_to(point.x, point.y);
        }
    }
}

fn append_rect(context: &Context, region: ClipRegion) {
    let (left, right) = ordered(region.x0, region.x1);
    let (top, bottom) = ordered(region.y0, region.y1);
    context.new_path();
    context.rectangle(left, top, right - left, bottom - top);
}

fn append_ellipse(
    context: &Context,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
) -> SparklineResult<()> {
    context.new_path();
    if rx <= 0.0 || ry <= 0.0 {
        return Ok(());
    }
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(cx, cy);
    context.scale(rx, ry);
    context.arc(0.0, 0.0, 1.0, start_deg.to_radians(), end_deg.to_radians());
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    Ok(())
}

fn append_wedge(context: &Context, wedge: WedgePath) {
    let WedgePath { center, radius, .. } = wedge;
    context.new_path();
    context.move_to(center.x, center.y);
    context.line_to(center.x + radius, center.y);
    // Positive cairo angles sweep clockwise on screen, matching sweep flag 1.
    let end_angle = wedge.end_angle();
    if wedge.sweep_flag == 1 {
        context.arc(center.x, center.y, radius, 0.0, end_angle);
    } else {
        context.arc_negative(center.x, center.y, radius, 0.0, end_angle);
    }
    context.close_path();
}

fn stroke_open_path(context: &Context, color: Color) -> SparklineResult<()> {
    if color.is_transparent() {
        context.new_path();
        return Ok(());
    }
    apply_color(context, color);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err))
}

fn fill_and_outline(context: &Context, paint: PaintState) -> SparklineResult<()> {
    if !paint.fill.is_transparent() {
        apply_color(context, paint.fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
    }
    if let Some(stroke) = paint.stroke.filter(|color| !color.is_transparent()) {
        apply_color(context, stroke);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke shape outline", err))?;
    }
    context.new_path();
    Ok(())
}

fn oversized(frame: &RenderFrame) -> SparklineError {
    SparklineError::InvalidCanvas {
        width: frame.width,
        height: frame.height,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> SparklineError {
    SparklineError::Backend(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_centred_vertically_on_anchor() {
        assert_eq!(
            text_origin(TextHAlign::Left, 9.0, 10.5, 30.0, 13.0),
            (9.0, 4.0)
        );
        assert_eq!(
            text_origin(TextHAlign::Right, 40.0, 10.5, 30.0, 13.0),
            (10.0, 4.0)
        );
        assert_eq!(
            text_origin(TextHAlign::Center, 20.0, 7.0, 10.0, 14.0),
            (15.0, 0.0)
        );
    }
}
