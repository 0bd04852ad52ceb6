//! Native open/save dialogs behind a trait so the controller can be driven
//! without a desktop session.

use async_trait::async_trait;
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INPUT_FILTER_NAME: &str = "Aozora Text / Zip";
pub const INPUT_EXTENSIONS: [&str; 2] = ["txt", "zip"];
pub const OUTPUT_FILTER_NAME: &str = "EPUB Book";
pub const OUTPUT_EXTENSIONS: [&str; 1] = ["epub"];
pub const STYLESHEET_FILTER_NAME: &str = "Stylesheet";
pub const STYLESHEET_EXTENSIONS: [&str; 1] = ["css"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("file dialog failed: {0}")]
pub struct DialogError(pub String);

/// `Ok(None)` means the user cancelled.
#[async_trait]
pub trait FileDialogs: Send + Sync {
    async fn pick_input(&self) -> Result<Option<PathBuf>, DialogError>;
    async fn pick_output(&self, suggested_name: &str) -> Result<Option<PathBuf>, DialogError>;
    async fn pick_stylesheet(&self) -> Result<Option<PathBuf>, DialogError>;
}

/// Platform dialogs via `rfd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

#[async_trait]
impl FileDialogs for NativeDialogs {
    async fn pick_input(&self) -> Result<Option<PathBuf>, DialogError> {
        let picked = AsyncFileDialog::new()
            .set_title("青空文庫ファイルを選択")
            .add_filter(INPUT_FILTER_NAME, &INPUT_EXTENSIONS)
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf());
        picked.map(existing_file).transpose()
    }

    async fn pick_output(&self, suggested_name: &str) -> Result<Option<PathBuf>, DialogError> {
        let picked = AsyncFileDialog::new()
            .set_title("EPUBの保存先")
            .set_file_name(suggested_name)
            .add_filter(OUTPUT_FILTER_NAME, &OUTPUT_EXTENSIONS)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf());
        picked.map(writable_target).transpose()
    }

    async fn pick_stylesheet(&self) -> Result<Option<PathBuf>, DialogError> {
        let picked = AsyncFileDialog::new()
            .set_title("カスタムCSSを追加")
            .add_filter(STYLESHEET_FILTER_NAME, &STYLESHEET_EXTENSIONS)
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf());
        picked.map(existing_file).transpose()
    }
}

fn existing_file(path: PathBuf) -> Result<PathBuf, DialogError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(DialogError(format!("{} is not a readable file", path.display())))
    }
}

fn writable_target(path: PathBuf) -> Result<PathBuf, DialogError> {
    let parent = path.parent().unwrap_or(Path::new(""));
    if parent.as_os_str().is_empty() || parent.is_dir() {
        Ok(path)
    } else {
        Err(DialogError(format!(
            "directory {} does not exist",
            parent.display()
        )))
    }
}
