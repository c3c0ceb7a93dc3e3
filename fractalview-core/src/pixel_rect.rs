use crate::Pixel;
use serde::{Deserialize, Serialize};

/// Rectangle in pixel space, used for hit regions such as menu buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose center is `(cx, cy)`.
    pub fn centered(cx: i64, cy: i64, width: u32, height: u32) -> Self {
        Self::new(cx - width as i64 / 2, cy - height as i64 / 2, width, height)
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, pixel: &Pixel) -> bool {
        let (px, py) = (*pixel.x(), *pixel.y());
        px >= self.x
            && px < self.x + self.width as i64
            && py >= self.y
            && py < self.y + self.height as i64
    }

    pub fn center(&self) -> Pixel {
        Pixel::new(
            self.x + self.width as i64 / 2,
            self.y + self.height as i64 / 2,
        )
    }
}
