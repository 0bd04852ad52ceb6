mod constants;
mod ui;
mod workflow;

use crate::config::{AppConfig, ThemeMode};
use crate::dialogs::FileDialogs;
use crate::engine::{ConversionEngine, NovelMetadata};
use crate::settings::AppSettings;
use iced::{Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

use super::messages::{Message, Screen};

pub(crate) use constants::*;
pub(in crate::app) use ui::{Notice, NoticeLevel, PendingDialog};
pub(in crate::app) use workflow::Workflow;

/// External collaborators reached only through effects.
#[derive(Clone)]
pub struct Boundary {
    pub engine: Arc<dyn ConversionEngine>,
    pub dialogs: Arc<dyn FileDialogs>,
}

/// Controller state: owns the workflow and the settings; views only read it.
pub struct App {
    pub(super) screen: Screen,
    pub(super) workflow: Workflow,
    pub(super) settings: AppSettings,
    pub(super) dialog: Option<PendingDialog>,
    pub(super) notice: Option<Notice>,
    pub(super) config: AppConfig,
    pub(super) boundary: Boundary,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        boundary: Boundary,
        initial_input: Option<PathBuf>,
    ) -> (App, Task<Message>) {
        let mut app = App {
            screen: Screen::Home,
            workflow: Workflow::Idle,
            settings: config.conversion.clone(),
            dialog: None,
            notice: None,
            config,
            boundary,
        };
        tracing::debug!(settings = ?app.settings, "Initial conversion settings");

        let task = match initial_input {
            Some(path) => {
                let effects = app.begin_scan(path);
                Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)))
            }
            None => Task::none(),
        };
        (app, task)
    }

    pub fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }

    /// `isConverting` as the views see it.
    pub(super) fn is_converting(&self) -> bool {
        self.workflow.is_busy()
    }

    pub(super) fn can_upload(&self) -> bool {
        self.workflow.can_upload() && self.dialog.is_none()
    }

    pub(super) fn can_download(&self) -> bool {
        self.workflow.can_download() && self.dialog.is_none()
    }

    pub(super) fn metadata(&self) -> Option<&NovelMetadata> {
        self.workflow.metadata()
    }
}
