//! Configuration loading for the Aozora-to-EPUB converter.
//!
//! Start-up options live in `conf/config.toml` if present. Missing or invalid
//! entries fall back to defaults so the window still opens. The `[conversion]`
//! table seeds the in-memory settings; edits made in the UI are not written
//! back.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
