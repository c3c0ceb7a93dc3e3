use crate::{FractalError, GridSize, Pixel};
use serde::{Deserialize, Serialize};

/// Rectangular region of the plane mapped onto the pixel grid.
///
/// - `domain`: horizontal extent `[x_min, x_max]` (real axis)
/// - `range`: vertical extent `[y_min, y_max]` (imaginary axis)
///
/// The per-pixel weights are derived from the intervals and the grid and are
/// only ever replaced together with them, so a `Viewport` value is always
/// internally consistent. Precision is plain f64 and degrades after many zooms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportBounds", into = "ViewportBounds")]
pub struct Viewport {
    domain: (f64, f64),
    range: (f64, f64),
    grid: GridSize,
    pixel_weight_x: f64,
    pixel_weight_y: f64,
}

/// Serialized form; validated on the way back in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct ViewportBounds {
    domain: (f64, f64),
    range: (f64, f64),
    grid: GridSize,
}

impl Viewport {
    /// Domain of the classic full Mandelbrot view.
    pub const DEFAULT_DOMAIN: (f64, f64) = (-2.0, 1.0);
    /// Range of the classic full Mandelbrot view.
    pub const DEFAULT_RANGE: (f64, f64) = (-1.5, 1.5);

    pub fn new(domain: (f64, f64), range: (f64, f64), grid: GridSize) -> Result<Self, FractalError> {
        let (x_min, x_max) = domain;
        let (y_min, y_max) = range;
        let invalid = FractalError::InvalidViewport {
            x_min,
            x_max,
            y_min,
            y_max,
        };

        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(invalid);
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(invalid);
        }
        if grid.width == 0 || grid.height == 0 {
            return Err(FractalError::InvalidGrid {
                width: grid.width,
                height: grid.height,
            });
        }

        let pixel_weight_x = (x_max - x_min) / grid.width as f64;
        let pixel_weight_y = (y_max - y_min) / grid.height as f64;
        // An interval narrower than a few ulps collapses to zero weight.
        if pixel_weight_x <= 0.0 || pixel_weight_y <= 0.0 {
            return Err(invalid);
        }

        Ok(Self {
            domain,
            range,
            grid,
            pixel_weight_x,
            pixel_weight_y,
        })
    }

    /// The classic Mandelbrot view, `[-2, 1] x [-1.5, 1.5]`.
    pub fn mandelbrot_default(grid: GridSize) -> Result<Self, FractalError> {
        Self::new(Self::DEFAULT_DOMAIN, Self::DEFAULT_RANGE, grid)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn pixel_weight_x(&self) -> f64 {
        self.pixel_weight_x
    }

    pub fn pixel_weight_y(&self) -> f64 {
        self.pixel_weight_y
    }

    pub fn width(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    pub fn height(&self) -> f64 {
        self.range.1 - self.range.0
    }

    /// Zoom in on `center_pixel`, shrinking both extents by `factor`.
    ///
    /// The plane point under `center_pixel` becomes the center of the new
    /// viewport. Domain, range and pixel weights are replaced together; on
    /// error `self` is left unchanged.
    pub fn zoom(&mut self, center_pixel: Pixel, factor: f64) -> Result<(), FractalError> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(FractalError::InvalidZoomFactor(factor));
        }

        let center = crate::pixel_to_plane(&center_pixel, self);
        let (cx, cy) = (*center.x(), *center.y());
        let new_w = self.width() * factor;
        let new_h = self.height() * factor;

        let zoomed = Self::new(
            (cx - new_w / 2.0, cx + new_w / 2.0),
            (cy - new_h / 2.0, cy + new_h / 2.0),
            self.grid,
        )?;

        log::debug!(
            "zoom x{} at ({}, {}): domain {:?} range {:?}",
            factor,
            center_pixel.x(),
            center_pixel.y(),
            zoomed.domain,
            zoomed.range
        );

        *self = zoomed;
        Ok(())
    }
}

impl TryFrom<ViewportBounds> for Viewport {
    type Error = FractalError;

    fn try_from(bounds: ViewportBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.domain, bounds.range, bounds.grid)
    }
}

impl From<Viewport> for ViewportBounds {
    fn from(viewport: Viewport) -> Self {
        Self {
            domain: viewport.domain,
            range: viewport.range,
            grid: viewport.grid,
        }
    }
}
