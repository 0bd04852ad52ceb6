use super::super::state::{App, Notice, PendingDialog};
use super::Effect;
use crate::dialogs::DialogError;
use crate::settings::{SettingsPatch, update_settings};
use std::path::PathBuf;
use tracing::{debug, error, info};

impl App {
    /// Settings edits never touch the workflow and are allowed while busy.
    pub(super) fn handle_settings_changed(&mut self, patch: SettingsPatch) {
        self.settings = update_settings(&self.settings, patch);
        debug!(settings = ?self.settings, "Settings updated");
    }

    pub(super) fn handle_add_stylesheet_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.dialog.is_some() {
            debug!(dialog = ?self.dialog, "Stylesheet picker ignored");
            return;
        }
        self.dialog = Some(PendingDialog::Stylesheet);
        effects.push(Effect::PickStylesheet);
    }

    pub(super) fn handle_stylesheet_picked(&mut self, result: Result<Option<PathBuf>, DialogError>) {
        if self.dialog != Some(PendingDialog::Stylesheet) {
            return;
        }
        self.dialog = None;
        match result {
            Ok(Some(path)) => {
                let mut paths = self.settings.custom_css_paths.clone();
                paths.push(path.to_string_lossy().into_owned());
                info!(path = %path.display(), "Custom stylesheet added");
                self.handle_settings_changed(SettingsPatch::custom_css_paths(paths));
            }
            Ok(None) => debug!("Stylesheet picker cancelled"),
            Err(err) => {
                error!(%err, "Stylesheet picker failed");
                self.notice = Some(Notice::error(format!("CSSを追加できませんでした: {err}")));
            }
        }
    }

    pub(super) fn handle_remove_stylesheet(&mut self, index: usize) {
        if index >= self.settings.custom_css_paths.len() {
            return;
        }
        let mut paths = self.settings.custom_css_paths.clone();
        let removed = paths.remove(index);
        info!(path = %removed, index, "Custom stylesheet removed");
        self.handle_settings_changed(SettingsPatch::custom_css_paths(paths));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{Boundary, Workflow};
    use super::*;
    use crate::config::AppConfig;
    use crate::test_fixtures::{FakeDialogs, FakeEngine, botchan};
    use std::sync::Arc;

    fn build_app() -> App {
        let boundary = Boundary {
            engine: Arc::new(FakeEngine::new(Ok(botchan()), Ok(Vec::new()))),
            dialogs: Arc::new(FakeDialogs::default()),
        };
        let (app, _task) = App::bootstrap(AppConfig::default(), boundary, None);
        app
    }

    fn add_stylesheet(app: &mut App, path: &str) {
        assert_eq!(
            app.reduce(Message::AddStylesheetRequested),
            vec![Effect::PickStylesheet]
        );
        app.reduce(Message::StylesheetPicked(Ok(Some(PathBuf::from(path)))));
    }

    #[test]
    fn stylesheets_append_in_order_and_allow_duplicates() {
        let mut app = build_app();

        add_stylesheet(&mut app, "a.css");
        add_stylesheet(&mut app, "b.css");
        add_stylesheet(&mut app, "a.css");

        assert_eq!(app.settings.custom_css_paths, vec!["a.css", "b.css", "a.css"]);
        assert_eq!(
            app.settings.stylesheets(),
            vec!["prelude", "miyabi", "a.css", "b.css", "a.css"]
        );
    }

    #[test]
    fn remove_by_index_keeps_remaining_order() {
        let mut app = build_app();
        add_stylesheet(&mut app, "a.css");
        add_stylesheet(&mut app, "b.css");
        add_stylesheet(&mut app, "c.css");

        app.reduce(Message::RemoveStylesheet(1));
        app.reduce(Message::RemoveStylesheet(9));

        assert_eq!(app.settings.custom_css_paths, vec!["a.css", "c.css"]);
    }

    #[test]
    fn cancelled_stylesheet_picker_changes_nothing() {
        let mut app = build_app();
        let before = app.settings.clone();

        app.reduce(Message::AddStylesheetRequested);
        app.reduce(Message::StylesheetPicked(Ok(None)));

        assert_eq!(app.settings, before);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn settings_can_change_while_scanning() {
        let mut app = build_app();
        app.workflow = Workflow::Scanning {
            input: PathBuf::from("novel.txt"),
        };

        app.reduce(Message::SettingsChanged(SettingsPatch::use_miyabi(false)));
        add_stylesheet(&mut app, "late.css");

        assert!(!app.settings.use_miyabi);
        assert_eq!(app.settings.custom_css_paths, vec!["late.css"]);
        assert_eq!(
            app.workflow,
            Workflow::Scanning {
                input: PathBuf::from("novel.txt")
            }
        );
    }

    #[test]
    fn identical_patch_is_a_noop() {
        let mut app = build_app();
        let before = app.settings.clone();

        app.reduce(Message::SettingsChanged(SettingsPatch::from(&before)));

        assert_eq!(app.settings, before);
    }
}
