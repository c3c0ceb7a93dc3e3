pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod pixel_rect;
pub mod points;
pub mod transforms;
pub mod viewport;

pub use color::{hsv_to_rgb, unit_rgb_to_color, Color, BLACK, WHITE};
pub use config::{
    get_fractal_config, FractalConfig, FractalKind, RenderSettings, CHAOS_GAME_CONFIG,
    FRACTAL_CONFIGS, MANDELBROT_CONFIG, MIN_GRID_SIDE, RECURSIVE_TRIANGLE_CONFIG,
};
pub use error::FractalError;
pub use grid::GridSize;
pub use pixel_rect::PixelRect;
pub use points::{Pixel, PlanePoint, Point, Triangle, CORNER_INSET};
pub use transforms::{pixel_to_plane, plane_to_pixel};
pub use viewport::Viewport;
