//! Sierpinski triangle by recursive subdivision.
//!
//! Each level outlines the triangle, then recurses into the three corner
//! sub-triangles formed by the edge midpoints. The inverted middle triangle
//! is never visited. Recursion stops once the top-left side drops below
//! `MIN_SIDE`; halving per level bounds the depth by `log2(side)`.

use crate::surface::Surface;
use fractalview_core::{Color, FractalError, Triangle};

/// Triangles with a shorter top-left side are not drawn.
pub const MIN_SIDE: f64 = 2.0;

/// Outline `triangle` and all its corner sub-triangles in depth-first order
/// (top, left, right). Returns the number of outlines drawn.
pub fn subdivide<S: Surface + ?Sized>(
    surface: &mut S,
    triangle: &Triangle<f64>,
    color: Color,
) -> Result<usize, FractalError> {
    if !triangle.is_finite() {
        return Err(FractalError::InvalidTriangle);
    }
    let mut drawn = 0;
    visit(triangle, &mut |t| {
        surface.draw_polygon_outline(&t.to_pixels(), color);
        drawn += 1;
    });
    surface.present();
    log::debug!("Subdivision drew {} triangles", drawn);
    Ok(drawn)
}

/// The triangles `subdivide` would outline, in draw order.
pub fn subdivision_triangles(triangle: &Triangle<f64>) -> Result<Vec<Triangle<f64>>, FractalError> {
    if !triangle.is_finite() {
        return Err(FractalError::InvalidTriangle);
    }
    let mut out = Vec::new();
    visit(triangle, &mut |t| out.push(*t));
    Ok(out)
}

fn visit<F: FnMut(&Triangle<f64>)>(triangle: &Triangle<f64>, draw: &mut F) {
    if triangle.side() < MIN_SIDE {
        return;
    }
    draw(triangle);

    let Triangle { top, left, right } = *triangle;
    let top_left = top.midpoint(&left);
    let top_right = top.midpoint(&right);
    let left_right = left.midpoint(&right);

    visit(&Triangle::new(top, top_left, top_right), draw);
    visit(&Triangle::new(top_left, left, left_right), draw);
    visit(&Triangle::new(top_right, left_right, right), draw);
}
