pub(crate) fn default_window_width() -> f32 {
    720.0
}

pub(crate) fn default_window_height() -> f32 {
    640.0
}

pub(crate) fn default_engine_program() -> String {
    "ayame".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
