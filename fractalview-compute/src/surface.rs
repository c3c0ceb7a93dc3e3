//! Drawing target the algorithms paint into.
//!
//! `Surface` is the seam to whatever actually shows pixels: a window, an
//! image file, or a test recorder. Only `size`, `set_pixel` and `present`
//! are required; the outline primitives have rasterizing defaults that clip
//! to the grid.

use fractalview_core::{Color, FractalError, GridSize, Pixel};

pub trait Surface {
    fn size(&self) -> GridSize;

    /// Write one pixel. Off-grid writes are rejected with `OutOfBoundsPixel`.
    fn set_pixel(&mut self, pixel: Pixel, color: Color) -> Result<(), FractalError>;

    /// Make everything drawn so far visible.
    fn present(&mut self);

    fn fill(&mut self, color: Color) {
        let grid = self.size();
        for pixel in grid.pixels() {
            plot_clipped(self, pixel, color);
        }
    }

    /// Bresenham line, both endpoints inclusive. Clipped to the grid.
    fn draw_line(&mut self, from: Pixel, to: Pixel, color: Color) {
        let (mut x0, mut y0) = from.into_parts();
        let (x1, y1) = to.into_parts();
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            plot_clipped(self, Pixel::new(x0, y0), color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Closed outline through `vertices`.
    fn draw_polygon_outline(&mut self, vertices: &[Pixel], color: Color) {
        for (i, from) in vertices.iter().enumerate() {
            let to = vertices[(i + 1) % vertices.len()];
            self.draw_line(*from, to, color);
        }
    }

    /// Midpoint circle outline.
    fn draw_circle_outline(&mut self, center: Pixel, radius: u32, color: Color) {
        let (cx, cy) = center.into_parts();
        let mut x = radius as i64;
        let mut y = 0_i64;
        let mut err = 1 - x;

        while x >= y {
            for (px, py) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                plot_clipped(self, Pixel::new(cx + px, cy + py), color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

/// Set a pixel if it lies on the grid; silently skip it otherwise.
fn plot_clipped<S: Surface + ?Sized>(surface: &mut S, pixel: Pixel, color: Color) {
    if surface.size().contains(&pixel) {
        // In-bounds writes cannot fail.
        let _ = surface.set_pixel(pixel, color);
    }
}

/// In-memory RGB surface, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    grid: GridSize,
    pixels: Vec<Color>,
    frames_presented: u64,
}

impl PixelBuffer {
    pub fn new(grid: GridSize, background: Color) -> Self {
        Self {
            grid,
            pixels: vec![background; grid.area()],
            frames_presented: 0,
        }
    }

    /// Wrap already computed row-major colors.
    pub fn from_colors(grid: GridSize, pixels: Vec<Color>) -> Result<Self, FractalError> {
        if pixels.len() != grid.area() {
            return Err(FractalError::InvalidGrid {
                width: grid.width,
                height: grid.height,
            });
        }
        Ok(Self {
            grid,
            pixels,
            frames_presented: 0,
        })
    }

    pub fn get(&self, pixel: &Pixel) -> Option<Color> {
        self.grid.index_of(pixel).ok().map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packed RGB bytes, three per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> GridSize {
        self.grid
    }

    fn set_pixel(&mut self, pixel: Pixel, color: Color) -> Result<(), FractalError> {
        let index = self.grid.index_of(&pixel)?;
        self.pixels[index] = color;
        Ok(())
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
