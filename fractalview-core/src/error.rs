//! Error types shared by every fractalview crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    #[error("Invalid viewport: domain [{x_min}, {x_max}], range [{y_min}, {y_max}]")]
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("Zoom factor must lie strictly between 0 and 1, got {0}")]
    InvalidZoomFactor(f64),

    #[error("Pixel grid must be non-empty, got {width}x{height}")]
    InvalidGrid { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) lies outside the {width}x{height} buffer")]
    OutOfBoundsPixel {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Triangle vertices must be finite")]
    InvalidTriangle,

    #[error("Invalid settings: {0}")]
    Config(String),

    #[error("Image export failed: {0}")]
    Image(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FractalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
