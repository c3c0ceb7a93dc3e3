//! Fractal registry and runtime render settings.
//!
//! The registry is static metadata used by the application shell. Render
//! settings are the tunable parameters, loadable from JSON.

use crate::{Color, FractalError, GridSize, Viewport, CORNER_INSET, WHITE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The visualizations the viewer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKind {
    Mandelbrot,
    ChaosGame,
    RecursiveTriangle,
}

/// Configuration for a fractal type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    pub kind: FractalKind,
    /// Unique identifier, also the CLI subcommand name
    pub id: &'static str,
    /// Label shown on the menu button
    pub display_name: &'static str,
    /// Window caption while the fractal is shown
    pub title: &'static str,
    pub background: Color,
}

pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::Mandelbrot,
    id: "mandelbrot",
    display_name: "Simple Mandelbrot Fractal",
    title: "Simple Mandelbrot Fractal",
    background: WHITE,
};

pub static CHAOS_GAME_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::ChaosGame,
    id: "chaos",
    display_name: "Sierpinski Triangle",
    title: "Sierpinski Triangle Chaos",
    background: WHITE,
};

pub static RECURSIVE_TRIANGLE_CONFIG: FractalConfig = FractalConfig {
    kind: FractalKind::RecursiveTriangle,
    id: "recursive",
    display_name: "Sierpinski Triangle Recursive",
    title: "Sierpinski Triangle Recursive",
    background: WHITE,
};

/// Menu order, top to bottom.
pub static FRACTAL_CONFIGS: [&FractalConfig; 3] = [
    &CHAOS_GAME_CONFIG,
    &RECURSIVE_TRIANGLE_CONFIG,
    &MANDELBROT_CONFIG,
];

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    FRACTAL_CONFIGS.iter().copied().find(|c| c.id == id)
}

impl FractalKind {
    pub fn config(&self) -> &'static FractalConfig {
        match self {
            Self::Mandelbrot => &MANDELBROT_CONFIG,
            Self::ChaosGame => &CHAOS_GAME_CONFIG,
            Self::RecursiveTriangle => &RECURSIVE_TRIANGLE_CONFIG,
        }
    }
}

/// Smallest grid side that keeps the inset attractor corners on the grid.
pub const MIN_GRID_SIDE: u32 = 2 * CORNER_INSET as u32 + 1;

/// Tunable render parameters. Every field has a default, so a partial JSON
/// document is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Escape-time iteration cap; also the "inside the set" sentinel.
    pub max_iterations: u32,
    /// Per-click shrink of each viewport extent.
    pub zoom_factor: f64,
    pub chaos_repetitions: u32,
    /// Present the surface after this many chaos points.
    pub redraw_every: u32,
    /// Chaos-game RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Render Mandelbrot rows on the rayon pool.
    pub parallel: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            max_iterations: 200,
            zoom_factor: 0.2,
            chaos_repetitions: 30_000,
            redraw_every: 100,
            seed: None,
            parallel: false,
        }
    }
}

impl RenderSettings {
    pub fn from_json_str(json: &str) -> Result<Self, FractalError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FractalError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), FractalError> {
        GridSize::new(self.width, self.height)?;
        if self.width < MIN_GRID_SIDE || self.height < MIN_GRID_SIDE {
            return Err(FractalError::Config(format!(
                "grid must be at least {}x{}, got {}x{}",
                MIN_GRID_SIDE, MIN_GRID_SIDE, self.width, self.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(FractalError::Config("max_iterations must be positive".into()));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(FractalError::InvalidZoomFactor(self.zoom_factor));
        }
        if self.redraw_every == 0 {
            return Err(FractalError::Config("redraw_every must be positive".into()));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<GridSize, FractalError> {
        GridSize::new(self.width, self.height)
    }

    /// Starting Mandelbrot viewport on this grid.
    pub fn default_viewport(&self) -> Result<Viewport, FractalError> {
        Viewport::mandelbrot_default(self.grid()?)
    }
}
