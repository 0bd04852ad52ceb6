use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<AppConfig>(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use crate::settings::Encoding;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.engine_program, "ayame");
        assert!(config.conversion.vertical);
        assert_eq!(config.conversion.encoding, Encoding::ShiftJis);
    }

    #[test]
    fn conversion_table_seeds_settings() {
        let config = parse_config(
            r#"
log_level = "warn"
theme = "day"
engine_program = "/opt/ayame/bin/ayame"

[conversion]
vertical = false
use_miyabi = false
custom_css_paths = ["fonts.css", "fonts.css"]
encoding = "utf-8"
"#,
        )
        .expect("parse");

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.engine_program, "/opt/ayame/bin/ayame");
        assert!(!config.conversion.vertical);
        assert!(config.conversion.use_prelude);
        assert!(!config.conversion.use_miyabi);
        assert_eq!(config.conversion.custom_css_paths, vec!["fonts.css", "fonts.css"]);
        assert_eq!(config.conversion.encoding, Encoding::Utf8);
    }

    #[test]
    fn unreadable_or_invalid_files_fall_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(
            load_config(&dir.path().join("missing.toml")),
            AppConfig::default()
        );

        let broken = dir.path().join("config.toml");
        fs::write(&broken, "[conversion]\nencoding = \"latin1\"\n").expect("write");
        assert_eq!(load_config(&broken), AppConfig::default());
    }
}
