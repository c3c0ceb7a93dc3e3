//! Application session: which screen is showing and how input drives it.
//!
//! Input arrives as `UiEvent`s from whatever front end owns the window (the
//! CLI feeds a scripted sequence). `Session::handle` routes the events that
//! mean the same thing everywhere, then dispatches on the pair of current
//! screen and event.

use crate::menu::{
    draw_button, draw_menu, go_back_region, hit_test, main_menu_buttons, MenuButton,
};
use fractalview_compute::{subdivide, ChaosGame, MandelbrotRenderer, Surface};
use fractalview_core::{
    Color, FractalError, FractalKind, GridSize, Pixel, RenderSettings, Triangle, BLACK,
    CORNER_INSET,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const GO_BACK_COLOR: Color = [200, 60, 60];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer button pressed at a pixel.
    Press(Pixel),
    /// Pointer moved to a pixel.
    PointerMove(Pixel),
    /// Open a visualization directly, as if its menu button were pressed.
    Select(FractalKind),
    /// Return to the main menu.
    Back,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub enum Screen {
    Menu { hovered: Option<FractalKind> },
    Mandelbrot(MandelbrotRenderer),
    ChaosGame(ChaosSession),
    RecursiveTriangle,
}

impl Screen {
    pub fn kind(&self) -> Option<FractalKind> {
        match self {
            Screen::Menu { .. } => None,
            Screen::Mandelbrot(_) => Some(FractalKind::Mandelbrot),
            Screen::ChaosGame(_) => Some(FractalKind::ChaosGame),
            Screen::RecursiveTriangle => Some(FractalKind::RecursiveTriangle),
        }
    }
}

/// Chaos-game screen state. The first press picks the start point; after
/// that every press or pointer move draws a one-step preview.
pub struct ChaosSession {
    game: ChaosGame<StdRng>,
    start: Option<Pixel>,
}

impl ChaosSession {
    pub fn start(&self) -> Option<Pixel> {
        self.start
    }

    pub fn game(&self) -> &ChaosGame<StdRng> {
        &self.game
    }
}

pub struct Session {
    settings: RenderSettings,
    grid: GridSize,
    buttons: Vec<MenuButton>,
    screen: Screen,
}

impl Session {
    pub fn new(settings: RenderSettings) -> Result<Self, FractalError> {
        settings.validate()?;
        let grid = settings.grid()?;
        Ok(Self {
            buttons: main_menu_buttons(grid),
            settings,
            grid,
            screen: Screen::Menu { hovered: None },
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// Show the main menu.
    pub fn show_menu<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.screen = Screen::Menu { hovered: None };
        draw_menu(surface, &self.buttons, None);
        log::info!("Main menu");
    }

    /// Clear to the fractal's background, draw it, and make it current.
    pub fn open<S: Surface + ?Sized>(
        &mut self,
        kind: FractalKind,
        surface: &mut S,
    ) -> Result<(), FractalError> {
        let config = kind.config();
        log::info!("Opening {}", config.title);
        surface.fill(config.background);

        self.screen = match kind {
            FractalKind::Mandelbrot => {
                let renderer = MandelbrotRenderer::from_settings(&self.settings)?;
                renderer.render(surface)?;
                Screen::Mandelbrot(renderer)
            }
            FractalKind::ChaosGame => {
                let game = ChaosGame::for_grid(self.grid, self.rng());
                draw_corners(surface, game.corners());
                Screen::ChaosGame(ChaosSession { game, start: None })
            }
            FractalKind::RecursiveTriangle => {
                let outer = Triangle::inset(self.grid.width, self.grid.height).to_f64();
                subdivide(surface, &outer, BLACK)?;
                Screen::RecursiveTriangle
            }
        };

        draw_go_back(surface);
        surface.present();
        Ok(())
    }

    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        event: UiEvent,
        surface: &mut S,
    ) -> Result<Control, FractalError> {
        let on_menu = self.screen.kind().is_none();

        // Screen-independent events first
        match event {
            UiEvent::Quit => return Ok(Control::Quit),
            UiEvent::Select(kind) => {
                self.open(kind, surface)?;
                return Ok(Control::Continue);
            }
            UiEvent::Back if !on_menu => {
                self.show_menu(surface);
                return Ok(Control::Continue);
            }
            UiEvent::Press(pixel) if !on_menu && go_back_region().contains(&pixel) => {
                self.show_menu(surface);
                return Ok(Control::Continue);
            }
            _ => {}
        }

        let mut selected = None;
        match (&mut self.screen, event) {
            (Screen::Menu { .. }, UiEvent::Press(pixel)) => {
                selected = hit_test(&self.buttons, &pixel).map(|b| b.kind());
            }
            (Screen::Menu { hovered }, UiEvent::PointerMove(pixel)) => {
                let now = hit_test(&self.buttons, &pixel).map(|b| b.kind());
                if now != *hovered {
                    *hovered = now;
                    draw_menu(surface, &self.buttons, now);
                }
            }
            (Screen::Mandelbrot(renderer), UiEvent::Press(pixel)) => {
                renderer.zoom_and_rerender(pixel, surface)?;
                draw_go_back(surface);
                surface.present();
            }
            (Screen::ChaosGame(chaos), UiEvent::Press(pixel)) => {
                if chaos.start.is_none() {
                    surface.fill(FractalKind::ChaosGame.config().background);
                    draw_go_back(surface);
                    chaos.game.draw(
                        surface,
                        pixel,
                        self.settings.chaos_repetitions,
                        self.settings.redraw_every,
                    )?;
                    chaos.start = Some(pixel);
                } else {
                    chaos.game.draw_preview(surface, pixel);
                }
            }
            (Screen::ChaosGame(chaos), UiEvent::PointerMove(pixel)) => {
                if chaos.start.is_some() {
                    chaos.game.draw_preview(surface, pixel);
                }
            }
            _ => {}
        }

        if let Some(kind) = selected {
            self.open(kind, surface)?;
        }
        Ok(Control::Continue)
    }

    fn rng(&self) -> StdRng {
        match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Headless default start for the chaos game: centered on the bottom edge
/// of the attractor triangle.
pub fn default_chaos_start(grid: GridSize) -> Pixel {
    Pixel::new(grid.width as i64 / 2, grid.height as i64 - CORNER_INSET)
}

fn draw_go_back<S: Surface + ?Sized>(surface: &mut S) {
    draw_button(surface, &go_back_region(), GO_BACK_COLOR);
}

fn draw_corners<S: Surface + ?Sized>(surface: &mut S, corners: &Triangle<i64>) {
    for corner in corners.corners() {
        surface.draw_circle_outline(*corner, 3, BLACK);
    }
}
