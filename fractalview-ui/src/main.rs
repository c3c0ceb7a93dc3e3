//! fractalview - render the fractal viewer's screens to PNG
//!
//! Usage:
//!   fractalview mandelbrot --zoom 450,300 --zoom 300,300
//!   fractalview chaos --start 300,550 --preview 100,100
//!   fractalview recursive -o sierpinski.png
//!   fractalview menu
//!
//! Each subcommand replays the clicks a user would make in the interactive
//! viewer, starting from the main menu, and saves the final frame.

use clap::{Parser, Subcommand};
use fractalview_compute::PixelBuffer;
use fractalview_core::{FractalError, FractalKind, GridSize, Pixel, RenderSettings, WHITE};
use fractalview_ui::{default_chaos_start, save_png, Control, Session, UiEvent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fractalview")]
#[command(about = "Mandelbrot and Sierpinski fractals rendered to PNG")]
#[command(version)]
struct Cli {
    /// JSON render settings; flags below override individual fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output PNG file
    #[arg(short, long, global = true, default_value = "fractal.png")]
    output: PathBuf,

    #[arg(long, global = true)]
    width: Option<u32>,

    #[arg(long, global = true)]
    height: Option<u32>,

    /// Escape-time iteration cap
    #[arg(long, global = true)]
    max_iterations: Option<u32>,

    /// Chaos-game RNG seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Render Mandelbrot rows in parallel
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Escape-time Mandelbrot, zoomed on each --zoom pixel in turn
    Mandelbrot {
        /// Pixel to zoom on, as X,Y (repeatable)
        #[arg(long = "zoom", value_parser = parse_pixel)]
        zooms: Vec<Pixel>,
    },

    /// Sierpinski triangle by the chaos game
    Chaos {
        /// Start pixel, as X,Y (default: centered, 50 pixels above the bottom)
        #[arg(long, value_parser = parse_pixel)]
        start: Option<Pixel>,

        /// Number of points after the start
        #[arg(long)]
        repetitions: Option<u32>,

        /// Pointer position for a one-step preview, as X,Y (repeatable)
        #[arg(long = "preview", value_parser = parse_pixel)]
        previews: Vec<Pixel>,
    },

    /// Sierpinski triangle by recursive subdivision
    Recursive,

    /// The main menu itself
    Menu,
}

impl Cli {
    fn settings(&self) -> Result<RenderSettings, FractalError> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)?,
            None => RenderSettings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            settings.max_iterations = max_iterations;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.parallel {
            settings.parallel = true;
        }
        if let Commands::Chaos {
            repetitions: Some(repetitions),
            ..
        } = self.command
        {
            settings.chaos_repetitions = repetitions;
        }
        settings.validate()?;
        Ok(settings)
    }
}

impl Commands {
    /// The input a user would produce, starting from the main menu.
    fn events(&self, grid: GridSize) -> Vec<UiEvent> {
        match self {
            Commands::Mandelbrot { zooms } => {
                let mut events = vec![UiEvent::Select(FractalKind::Mandelbrot)];
                events.extend(zooms.iter().map(|&p| UiEvent::Press(p)));
                events
            }
            Commands::Chaos {
                start, previews, ..
            } => {
                let start = start.unwrap_or_else(|| default_chaos_start(grid));
                let mut events = vec![
                    UiEvent::Select(FractalKind::ChaosGame),
                    UiEvent::Press(start),
                ];
                events.extend(previews.iter().map(|&p| UiEvent::Press(p)));
                events
            }
            Commands::Recursive => vec![UiEvent::Select(FractalKind::RecursiveTriangle)],
            Commands::Menu => Vec::new(),
        }
    }
}

fn parse_pixel(s: &str) -> Result<Pixel, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse::<i64>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<i64>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Pixel::new(x, y))
}

fn main() -> Result<(), FractalError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let mut session = Session::new(settings)?;
    let mut surface = PixelBuffer::new(session.grid(), WHITE);

    session.show_menu(&mut surface);
    for event in cli.command.events(session.grid()) {
        log::debug!("Event {:?}", event);
        if session.handle(event, &mut surface)? == Control::Quit {
            break;
        }
    }

    save_png(&surface, &cli.output)
}
