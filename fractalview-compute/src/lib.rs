pub mod chaos_game;
pub mod escape_time;
pub mod mandelbrot;
pub mod subdivision;
pub mod surface;

pub use chaos_game::{ChaosGame, ChaosPreview, ChaosWalk};
pub use escape_time::{color_for, iterate, DEFAULT_MAX_ITERATIONS};
pub use mandelbrot::{MandelbrotRenderer, DEFAULT_ZOOM_FACTOR};
pub use subdivision::{subdivide, subdivision_triangles, MIN_SIDE};
pub use surface::{PixelBuffer, Surface};

// Re-export core types for convenience
pub use fractalview_core::*;
