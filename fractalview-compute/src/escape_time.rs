//! Escape-time evaluation for the Mandelbrot set.

use fractalview_core::{hsv_to_rgb, unit_rgb_to_color, Color, PlanePoint, BLACK};

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

const ESCAPE_RADIUS: f64 = 2.0;

/// Number of completed iterations of `z = z^2 + c` before `|z| > 2`.
///
/// Returns `max_iterations` when the orbit stays bounded. That value doubles
/// as the "inside the set" sentinel; callers test for it by equality.
pub fn iterate(c: &PlanePoint, max_iterations: u32) -> u32 {
    let (cx, cy) = (*c.x(), *c.y());
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;

    for n in 0..max_iterations {
        // hypot rather than |z|^2 > 4 keeps the threshold exact at the boundary
        if zx.hypot(zy) > ESCAPE_RADIUS {
            return n;
        }

        // z = z^2 + c
        // new_zx = zx^2 - zy^2 + cx
        // new_zy = 2*zx*zy + cy
        let new_zx = zx * zx - zy * zy + cx;
        let new_zy = 2.0 * zx * zy + cy;
        zx = new_zx;
        zy = new_zy;
    }

    max_iterations
}

/// Rainbow banding by iteration count; black inside the set.
///
/// Hue is `n / max_iterations` at full saturation and value, with each
/// channel truncated to a byte.
pub fn color_for(n: u32, max_iterations: u32) -> Color {
    if n == max_iterations {
        return BLACK;
    }
    let hue = n as f64 / max_iterations as f64;
    unit_rgb_to_color(hsv_to_rgb(hue, 1.0, 1.0))
}
