//! Main menu layout and hit-testing.
//!
//! There is no font rendering: buttons are drawn as filled rectangles and
//! identified by their `FractalConfig` label in logs.

use fractalview_compute::Surface;
use fractalview_core::{
    Color, FractalConfig, FractalKind, GridSize, Pixel, PixelRect, FRACTAL_CONFIGS,
};

pub const MENU_BACKGROUND: Color = [126, 196, 252];
pub const BUTTON_COLOR: Color = [40, 40, 40];
pub const BUTTON_HOVER_COLOR: Color = [90, 90, 90];
pub const BUTTON_BORDER: Color = [255, 255, 255];

pub const BUTTON_WIDTH: u32 = 400;
pub const BUTTON_HEIGHT: u32 = 75;
/// Vertical button centers, top to bottom.
pub const BUTTON_CENTERS_Y: [i64; 3] = [225, 325, 425];

const GO_BACK_REGION: PixelRect = PixelRect {
    x: 10,
    y: 10,
    width: 120,
    height: 40,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuButton {
    pub config: &'static FractalConfig,
    pub region: PixelRect,
}

impl MenuButton {
    pub fn kind(&self) -> FractalKind {
        self.config.kind
    }

    pub fn label(&self) -> &'static str {
        self.config.display_name
    }
}

/// One button per registered fractal, centered horizontally on `grid`.
pub fn main_menu_buttons(grid: GridSize) -> Vec<MenuButton> {
    let cx = grid.width as i64 / 2;
    FRACTAL_CONFIGS
        .iter()
        .copied()
        .zip(BUTTON_CENTERS_Y)
        .map(|(config, cy)| MenuButton {
            config,
            region: PixelRect::centered(cx, cy, BUTTON_WIDTH, BUTTON_HEIGHT),
        })
        .collect()
}

/// Region that returns to the menu from any visualization.
pub fn go_back_region() -> PixelRect {
    GO_BACK_REGION
}

/// The button under `pixel`, if any.
pub fn hit_test<'a>(buttons: &'a [MenuButton], pixel: &Pixel) -> Option<&'a MenuButton> {
    buttons.iter().find(|b| b.region.contains(pixel))
}

/// Paint the menu background and every button, highlighting `hovered`.
pub fn draw_menu<S: Surface + ?Sized>(
    surface: &mut S,
    buttons: &[MenuButton],
    hovered: Option<FractalKind>,
) {
    surface.fill(MENU_BACKGROUND);
    for button in buttons {
        let fill = if hovered == Some(button.kind()) {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        draw_button(surface, &button.region, fill);
    }
    surface.present();
}

/// Filled rectangle with a one-pixel border, clipped to the surface.
pub fn draw_button<S: Surface + ?Sized>(surface: &mut S, region: &PixelRect, fill: Color) {
    let grid = surface.size();
    let (x0, y0) = (region.x, region.y);
    let (x1, y1) = (x0 + region.width as i64 - 1, y0 + region.height as i64 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let pixel = Pixel::new(x, y);
            if grid.contains(&pixel) {
                // in bounds, cannot fail
                let _ = surface.set_pixel(pixel, fill);
            }
        }
    }
    surface.draw_polygon_outline(
        &[
            Pixel::new(x0, y0),
            Pixel::new(x1, y0),
            Pixel::new(x1, y1),
            Pixel::new(x0, y1),
        ],
        BUTTON_BORDER,
    );
}
