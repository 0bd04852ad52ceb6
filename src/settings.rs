//! Rendering options applied to a conversion.
//!
//! `AppSettings` is a plain value: the controller replaces it wholesale through
//! [`update_settings`] and snapshots it when a download is requested, so an
//! in-flight conversion never observes later edits.

use serde::{Deserialize, Serialize};

/// Built-in stylesheet names understood by the conversion engine.
pub const PRELUDE_STYLESHEET: &str = "prelude";
pub const MIYABI_STYLESHEET: &str = "miyabi";

/// Declared encoding of the source text.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[default]
    #[serde(rename = "sjis")]
    ShiftJis,
}

pub const ENCODINGS: [Encoding; 2] = [Encoding::ShiftJis, Encoding::Utf8];

impl Encoding {
    /// Identifier passed across the engine boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::ShiftJis => "sjis",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::ShiftJis => "Shift_JIS (Default)",
        };
        write!(f, "{}", label)
    }
}

/// Conversion options chosen on the settings screen.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub vertical: bool,
    #[serde(default = "default_true")]
    pub use_prelude: bool,
    #[serde(default = "default_true")]
    pub use_miyabi: bool,
    /// Applied after the built-ins, in this order. Duplicates are kept.
    #[serde(default)]
    pub custom_css_paths: Vec<String>,
    #[serde(default)]
    pub encoding: Encoding,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            vertical: true,
            use_prelude: true,
            use_miyabi: true,
            custom_css_paths: Vec::new(),
            encoding: Encoding::ShiftJis,
        }
    }
}

fn default_true() -> bool {
    true
}

impl AppSettings {
    /// Ordered stylesheet list for the engine: prelude, miyabi, then custom
    /// paths in stored order.
    pub fn stylesheets(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.custom_css_paths.len() + 2);
        if self.use_prelude {
            list.push(PRELUDE_STYLESHEET.to_string());
        }
        if self.use_miyabi {
            list.push(MIYABI_STYLESHEET.to_string());
        }
        list.extend(self.custom_css_paths.iter().cloned());
        list
    }
}

/// Partial update; `None` fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub vertical: Option<bool>,
    pub use_prelude: Option<bool>,
    pub use_miyabi: Option<bool>,
    pub custom_css_paths: Option<Vec<String>>,
    pub encoding: Option<Encoding>,
}

impl SettingsPatch {
    pub fn vertical(vertical: bool) -> Self {
        SettingsPatch {
            vertical: Some(vertical),
            ..SettingsPatch::default()
        }
    }

    pub fn use_prelude(enabled: bool) -> Self {
        SettingsPatch {
            use_prelude: Some(enabled),
            ..SettingsPatch::default()
        }
    }

    pub fn use_miyabi(enabled: bool) -> Self {
        SettingsPatch {
            use_miyabi: Some(enabled),
            ..SettingsPatch::default()
        }
    }

    pub fn custom_css_paths(paths: Vec<String>) -> Self {
        SettingsPatch {
            custom_css_paths: Some(paths),
            ..SettingsPatch::default()
        }
    }

    pub fn encoding(encoding: Encoding) -> Self {
        SettingsPatch {
            encoding: Some(encoding),
            ..SettingsPatch::default()
        }
    }
}

impl From<&AppSettings> for SettingsPatch {
    fn from(settings: &AppSettings) -> Self {
        SettingsPatch {
            vertical: Some(settings.vertical),
            use_prelude: Some(settings.use_prelude),
            use_miyabi: Some(settings.use_miyabi),
            custom_css_paths: Some(settings.custom_css_paths.clone()),
            encoding: Some(settings.encoding),
        }
    }
}

/// Merge `patch` over `current` field by field.
pub fn update_settings(current: &AppSettings, patch: SettingsPatch) -> AppSettings {
    AppSettings {
        vertical: patch.vertical.unwrap_or(current.vertical),
        use_prelude: patch.use_prelude.unwrap_or(current.use_prelude),
        use_miyabi: patch.use_miyabi.unwrap_or(current.use_miyabi),
        custom_css_paths: patch
            .custom_css_paths
            .unwrap_or_else(|| current.custom_css_paths.clone()),
        encoding: patch.encoding.unwrap_or(current.encoding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_precede_custom_paths_in_order() {
        let settings = AppSettings {
            custom_css_paths: vec!["a.css".to_string(), "b.css".to_string()],
            ..AppSettings::default()
        };
        assert_eq!(
            settings.stylesheets(),
            vec!["prelude", "miyabi", "a.css", "b.css"]
        );
    }

    #[test]
    fn disabled_builtins_are_skipped() {
        let settings = AppSettings {
            use_prelude: false,
            use_miyabi: true,
            custom_css_paths: Vec::new(),
            ..AppSettings::default()
        };
        assert_eq!(settings.stylesheets(), vec!["miyabi"]);
    }

    #[test]
    fn duplicate_custom_paths_are_kept() {
        let settings = AppSettings {
            use_prelude: false,
            use_miyabi: false,
            custom_css_paths: vec!["x.css".to_string(), "x.css".to_string()],
            ..AppSettings::default()
        };
        assert_eq!(settings.stylesheets(), vec!["x.css", "x.css"]);
    }

    #[test]
    fn full_patch_of_current_is_identity() {
        let current = AppSettings {
            vertical: false,
            custom_css_paths: vec!["c.css".to_string()],
            encoding: Encoding::Utf8,
            ..AppSettings::default()
        };
        let updated = update_settings(&current, SettingsPatch::from(&current));
        assert_eq!(updated, current);
    }

    #[test]
    fn patch_only_touches_named_fields() {
        let current = AppSettings::default();
        let updated = update_settings(&current, SettingsPatch::encoding(Encoding::Utf8));
        assert_eq!(updated.encoding, Encoding::Utf8);
        assert_eq!(updated.vertical, current.vertical);
        assert_eq!(updated.use_prelude, current.use_prelude);
        assert_eq!(updated.use_miyabi, current.use_miyabi);
        assert!(updated.custom_css_paths.is_empty());
    }

    #[test]
    fn encoding_uses_wire_names() {
        let parsed: AppSettings = toml::from_str("encoding = \"utf-8\"").expect("parse");
        assert_eq!(parsed.encoding, Encoding::Utf8);
        assert_eq!(Encoding::ShiftJis.as_str(), "sjis");
        assert!(toml::from_str::<AppSettings>("encoding = \"latin1\"").is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed: AppSettings = toml::from_str("").expect("parse");
        assert_eq!(parsed, AppSettings::default());
    }
}
