//! Affine mapping between the pixel grid and the plane.
//!
//! Pixel row 0 is the top of the grid and corresponds to the maximum
//! imaginary value, so the y axis is inverted between the two spaces.

use crate::{Pixel, PlanePoint, Viewport};

/// Plane point under `pixel`.
///
/// No bounds checking: pixels off the grid map to points outside the
/// viewport.
pub fn pixel_to_plane(pixel: &Pixel, viewport: &Viewport) -> PlanePoint {
    let (x_min, _) = viewport.domain();
    let (_, y_max) = viewport.range();
    PlanePoint::new(
        *pixel.x() as f64 * viewport.pixel_weight_x() + x_min,
        y_max - *pixel.y() as f64 * viewport.pixel_weight_y(),
    )
}

/// Nearest pixel to `point`, each coordinate rounded half-to-even.
///
/// Points outside the viewport yield negative or off-grid pixels; callers
/// must bounds-check before writing.
pub fn plane_to_pixel(point: &PlanePoint, viewport: &Viewport) -> Pixel {
    let (x_min, _) = viewport.domain();
    let (_, y_max) = viewport.range();
    let x = (point.x() - x_min) / viewport.pixel_weight_x();
    let y = (y_max - point.y()) / viewport.pixel_weight_y();
    PlanePoint::new(x, y).round_to_pixel()
}
