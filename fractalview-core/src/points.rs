use serde::{Deserialize, Serialize};

/// Discrete pixel coordinate. Row 0 is the top of the grid.
///
/// Signed so that mapping a plane point from outside the viewport can
/// produce negative coordinates instead of wrapping.
pub type Pixel = Point<i64>;

/// Point in the continuous plane, `x` is the real part and `y` the imaginary part.
pub type PlanePoint = Point<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &T {
        &self.x
    }

    pub fn y(&self) -> &T {
        &self.y
    }

    pub fn into_parts(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl Point<i64> {
    /// Component-wise average, each coordinate truncated toward zero.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl Point<f64> {
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Nearest pixel, ties rounded to even.
    pub fn round_to_pixel(self) -> Pixel {
        Point::new(self.x.round_ties_even() as i64, self.y.round_ties_even() as i64)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Three corners of a triangle, named the way they are drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle<T> {
    pub top: Point<T>,
    pub left: Point<T>,
    pub right: Point<T>,
}

impl<T> Triangle<T> {
    pub fn new(top: Point<T>, left: Point<T>, right: Point<T>) -> Self {
        Self { top, left, right }
    }

    pub fn corners(&self) -> [&Point<T>; 3] {
        [&self.top, &self.left, &self.right]
    }
}

/// Distance of the attractor corners from the grid edges.
pub const CORNER_INSET: i64 = 50;

impl Triangle<i64> {
    /// The attractor triangle inset `CORNER_INSET` pixels from the grid edges.
    ///
    /// Corners are whole pixels, so on an odd width the top corner sits at
    /// `width / 2` rounded down, half a pixel left of the true center.
    pub fn inset(width: u32, height: u32) -> Self {
        let (w, h) = (width as i64, height as i64);
        Self::new(
            Point::new(w / 2, CORNER_INSET),
            Point::new(CORNER_INSET, h - CORNER_INSET),
            Point::new(w - CORNER_INSET, h - CORNER_INSET),
        )
    }

    pub fn to_f64(self) -> Triangle<f64> {
        Triangle::new(self.top.to_f64(), self.left.to_f64(), self.right.to_f64())
    }

    /// Closed-triangle containment by edge sign tests.
    pub fn contains(&self, p: &Pixel) -> bool {
        let edge = |a: &Pixel, b: &Pixel| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        let d1 = edge(&self.top, &self.left);
        let d2 = edge(&self.left, &self.right);
        let d3 = edge(&self.right, &self.top);
        let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
        let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
        !(has_neg && has_pos)
    }
}

impl Triangle<f64> {
    /// Length of the top-left edge; the subdivision size measure.
    pub fn side(&self) -> f64 {
        self.top.distance(&self.left)
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.left.is_finite() && self.right.is_finite()
    }

    pub fn to_pixels(self) -> [Pixel; 3] {
        [
            self.top.round_to_pixel(),
            self.left.round_to_pixel(),
            self.right.round_to_pixel(),
        ]
    }
}
