pub mod cli;
pub mod components;
pub mod gui;
pub mod logging;
pub mod models;
pub mod settings;
pub mod utils;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(calculate_tax, [Quit]);

/// Handler for the [`Quit`] action, bound to the quit key and menu item.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
