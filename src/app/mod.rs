mod messages;
mod state;
mod update;
mod view;

pub use state::{App, Boundary};

use crate::config::AppConfig;
use iced::{Size, window};
use std::path::PathBuf;

/// Launch the converter window; `initial_input` is scanned right away.
pub fn run_app(
    config: AppConfig,
    boundary: Boundary,
    initial_input: Option<PathBuf>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Ayame", App::update, App::view)
        .window(window_settings)
        .theme(App::theme)
        .run_with(move || App::bootstrap(config, boundary, initial_input))
}
