use smallvec::SmallVec;

use crate::core::{Point, VerticalMapping, index_of_max, index_of_min, mean, standard_deviation};
use crate::render::{Color, RenderFrame};

use crate::api::StyleConfig;

/// Mean ± one standard deviation of a normalized series, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StdDevBand {
    pub mean: f64,
    pub std_dev: f64,
    /// Pixel y of `mean + std_dev` (the upper edge on screen).
    pub y_top: f64,
    /// Pixel y of `mean - std_dev`.
    pub y_bottom: f64,
}

/// Computes the band for `values` using the chart's vertical mapping.
#[must_use]
pub fn std_dev_band(values: &[f64], mapping: VerticalMapping) -> Option<StdDevBand> {
    let mean = mean(values)?;
    let std_dev = standard_deviation(values)?;
    Some(StdDevBand {
        mean,
        std_dev,
        y_top: mapping.y_for(mean + std_dev),
        y_bottom: mapping.y_for(mean - std_dev),
    })
}

/// Full-width unstroked band, drawn before the series so the series covers it.
pub(super) fn draw_std_dev_band(
    frame: &mut RenderFrame,
    values: &[f64],
    mapping: VerticalMapping,
    width: f64,
    color: Color,
) {
    if let Some(band) = std_dev_band(values, mapping) {
        frame
            .stroke(Color::TRANSPARENT)
            .fill(color)
            .rectangle(0.0, band.y_bottom, width, band.y_top);
    }
}

/// Square marker of half-size `offset` centered on `point`.
pub(super) fn draw_marker(frame: &mut RenderFrame, point: Point, offset: f64, color: Color) {
    frame.stroke(Color::TRANSPARENT).fill(color).rectangle(
        point.x - offset,
        point.y - offset,
        point.x + offset,
        point.y + offset,
    );
}

/// Min, max and last markers in that order; `coords[i]` is the pixel position
/// of `values[i]`.
pub(super) fn draw_extreme_markers(
    frame: &mut RenderFrame,
    coords: &[Point],
    values: &[f64],
    config: &StyleConfig,
    offset: f64,
) {
    let mut markers: SmallVec<[(usize, Color); 3]> = SmallVec::new();
    if config.has_min {
        if let Some(index) = index_of_min(values) {
            markers.push((index, config.min_color));
        }
    }
    if config.has_max {
        if let Some(index) = index_of_max(values) {
            markers.push((index, config.max_color));
        }
    }
    if config.shows_last_marker() && !values.is_empty() {
        markers.push((values.len() - 1, config.last_color));
    }

    for (index, color) in markers {
        if let Some(point) = coords.get(index) {
            draw_marker(frame, *point, offset, color);
        }
    }
}

/// Line through `coords`; a single point draws nothing.
pub(super) fn open_polyline(frame: &mut RenderFrame, coords: &[Point]) {
    if coords.len() >= 2 {
        frame.polyline(coords.to_vec());
    }
}

/// Closes the series against the bottom edge for an under-line fill.
///
/// The outline leaves the canvas one pixel past both ends and the bottom so
/// only the top edge of the polygon is visible.
#[must_use]
pub fn closed_polygon_points(coords: &[Point], width: f64, height: f64) -> Vec<Point> {
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return Vec::new();
    };
    let mut points = Vec::with_capacity(coords.len() + 4);
    points.push(Point::new(-1.0, height + 1.0));
    points.push(Point::new(first.x - 1.0, first.y));
    points.extend_from_slice(coords);
    points.push(Point::new(last.x + 1.0, last.y));
    points.push(Point::new(width + 1.0, height + 1.0));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_spans_mean_plus_minus_std_dev() {
        let mapping = VerticalMapping::new(14.0).expect("mapping");
        let band = std_dev_band(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], mapping).expect("band");
        assert!((band.mean - 5.0).abs() <= 1e-12);
        assert!((band.std_dev - 2.0).abs() <= 1e-12);
        assert!((band.y_top - mapping.y_for(7.0)).abs() <= 1e-12);
        assert!((band.y_bottom - mapping.y_for(3.0)).abs() <= 1e-12);
        assert!(band.y_top < band.y_bottom);
    }

    #[test]
    fn closed_polygon_pads_off_canvas() {
        let coords = [Point::new(0.0, 5.0), Point::new(2.0, 3.0)];
        let points = closed_polygon_points(&coords, 2.0, 14.0);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(-1.0, 15.0));
        assert_eq!(points[1], Point::new(-1.0, 5.0));
        assert_eq!(points[4], Point::new(3.0, 3.0));
        assert_eq!(points[5], Point::new(3.0, 15.0));
    }
}
