//! PNG export of a rendered surface.

use fractalview_compute::{PixelBuffer, Surface};
use fractalview_core::FractalError;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Copy the buffer into an `RgbImage`.
pub fn to_image(buffer: &PixelBuffer) -> Result<RgbImage, FractalError> {
    let grid = buffer.size();
    ImageBuffer::<Rgb<u8>, _>::from_raw(grid.width, grid.height, buffer.to_rgb_bytes())
        .ok_or_else(|| FractalError::Image("pixel data does not match grid size".into()))
}

/// Write the buffer as a PNG file.
pub fn save_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), FractalError> {
    let path = path.as_ref();
    to_image(buffer)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FractalError::Image(e.to_string()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalview_core::{GridSize, Pixel, BLACK, WHITE};

    #[test]
    fn image_matches_buffer() {
        let mut buf = PixelBuffer::new(GridSize::new(4, 3).unwrap(), WHITE);
        buf.set_pixel(Pixel::new(3, 2), [10, 20, 30]).unwrap();
        let img = to_image(&buf).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(3, 2).0, [10, 20, 30]);
        assert_eq!(img.get_pixel(0, 0).0, WHITE);
    }

    #[test]
    fn save_png_writes_readable_file() {
        let buf = PixelBuffer::new(GridSize::new(8, 8).unwrap(), BLACK);
        let path = std::env::temp_dir().join(format!("fractalview-{}.png", std::process::id()));
        save_png(&buf, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_png_into_missing_directory_fails() {
        let buf = PixelBuffer::new(GridSize::new(2, 2).unwrap(), BLACK);
        let path = std::env::temp_dir()
            .join("fractalview-missing-dir")
            .join("nested")
            .join("out.png");
        assert!(matches!(save_png(&buf, &path), Err(FractalError::Image(_))));
    }
}
