use crate::{FractalError, Pixel};
use serde::{Deserialize, Serialize};

/// Dimensions of the pixel grid every visualization draws into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pixel: &Pixel) -> bool {
        let (x, y) = (*pixel.x(), *pixel.y());
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Row-major buffer index, or `OutOfBoundsPixel` if the pixel is off-grid.
    pub fn index_of(&self, pixel: &Pixel) -> Result<usize, FractalError> {
        if !self.contains(pixel) {
            return Err(FractalError::OutOfBoundsPixel {
                x: *pixel.x(),
                y: *pixel.y(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(*pixel.y() as usize * self.width as usize + *pixel.x() as usize)
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        (0..self.height as i64)
            .flat_map(move |y| (0..self.width as i64).map(move |x| Pixel::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
        }
    }
}
