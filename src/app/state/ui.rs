use crate::settings::AppSettings;

/// Native dialog currently open on behalf of an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDialog {
    Input,
    /// Settings are captured when the download is requested.
    Output { settings: AppSettings },
    Stylesheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Dismissible banner on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub(in crate::app) level: NoticeLevel,
    pub(in crate::app) text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}
