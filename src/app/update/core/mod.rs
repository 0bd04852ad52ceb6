mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::App;
use iced::Task;

#[cfg(test)]
pub(in crate::app) use runtime::perform;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
