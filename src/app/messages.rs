use crate::dialogs::DialogError;
use crate::engine::{EngineError, NovelMetadata};
use crate::output::WriteError;
use crate::settings::SettingsPatch;
use std::path::PathBuf;

/// Top-level screens selectable from the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Settings,
}

/// Messages emitted by the UI and by completed boundary calls.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    UploadRequested,
    InputPicked(Result<Option<PathBuf>, DialogError>),
    ScanFinished {
        input: PathBuf,
        result: Result<NovelMetadata, EngineError>,
    },
    DownloadRequested,
    OutputPicked(Result<Option<PathBuf>, DialogError>),
    ConvertFinished {
        output: PathBuf,
        result: Result<Vec<u8>, EngineError>,
    },
    EpubWritten {
        output: PathBuf,
        result: Result<u64, WriteError>,
    },
    SettingsChanged(SettingsPatch),
    AddStylesheetRequested,
    StylesheetPicked(Result<Option<PathBuf>, DialogError>),
    RemoveStylesheet(usize),
    DismissNotice,
}
