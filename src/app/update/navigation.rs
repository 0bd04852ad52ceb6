use super::super::messages::Screen;
use super::super::state::App;
use tracing::debug;

impl App {
    pub(super) fn handle_navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!(?screen, "Switched screen");
            self.screen = screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{Boundary, Workflow};
    use super::*;
    use crate::config::AppConfig;
    use crate::test_fixtures::{FakeDialogs, FakeEngine, botchan};
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn navigation_toggles_screens_without_touching_workflow() {
        let boundary = Boundary {
            engine: Arc::new(FakeEngine::new(Ok(botchan()), Ok(Vec::new()))),
            dialogs: Arc::new(FakeDialogs::default()),
        };
        let (mut app, _task) = App::bootstrap(AppConfig::default(), boundary, None);
        app.workflow = Workflow::Ready {
            input: PathBuf::from("novel.txt"),
            metadata: botchan(),
        };
        let before = app.workflow.clone();

        assert_eq!(app.screen, Screen::Home);
        assert!(app.reduce(Message::Navigate(Screen::Settings)).is_empty());
        assert_eq!(app.screen, Screen::Settings);
        app.reduce(Message::Navigate(Screen::Home));
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.workflow, before);
    }
}
