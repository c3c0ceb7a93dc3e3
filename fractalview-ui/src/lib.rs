//! Application shell for the fractal viewer: menu, screen dispatch and
//! image export over the compute crate.

pub mod app;
pub mod export;
pub mod menu;

pub use app::{default_chaos_start, ChaosSession, Control, Screen, Session, UiEvent};
pub use export::{save_png, to_image};
pub use menu::{go_back_region, hit_test, main_menu_buttons, MenuButton};
