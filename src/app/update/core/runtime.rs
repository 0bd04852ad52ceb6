use super::super::super::messages::Message;
use super::super::super::state::{App, Boundary};
use super::super::Effect;
use crate::output::{WriteError, write_epub};
use iced::Task;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&self, effect: Effect) -> Task<Message> {
        debug!(effect = effect_name(&effect), "Dispatching effect");
        Task::perform(perform(effect, self.boundary.clone()), |message| message)
    }
}

/// Run one effect against the boundary and report its outcome as a message.
pub(in crate::app) async fn perform(effect: Effect, boundary: Boundary) -> Message {
    match effect {
        Effect::PickInput => Message::InputPicked(boundary.dialogs.pick_input().await),
        Effect::Scan { input } => {
            info!(path = %input.display(), "Scanning file");
            let result = boundary.engine.scan_file(&input).await;
            Message::ScanFinished { input, result }
        }
        Effect::PickOutput { suggested_name } => {
            Message::OutputPicked(boundary.dialogs.pick_output(&suggested_name).await)
        }
        Effect::Convert { output, request } => {
            info!(
                input = %request.input.display(),
                stylesheets = ?request.stylesheets,
                vertical = request.vertical,
                encoding = request.encoding.as_str(),
                "Converting file"
            );
            let result = boundary.engine.convert_file(&request).await;
            Message::ConvertFinished { output, result }
        }
        Effect::WriteEpub { output, bytes } => {
            let target = output.clone();
            let result = tokio::task::spawn_blocking(move || write_epub(&target, &bytes))
                .await
                .unwrap_or_else(|err| {
                    Err(WriteError {
                        path: output.clone(),
                        reason: err.to_string(),
                    })
                });
            Message::EpubWritten { output, result }
        }
        Effect::PickStylesheet => {
            Message::StylesheetPicked(boundary.dialogs.pick_stylesheet().await)
        }
    }
}

fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::PickInput => "pick-input",
        Effect::Scan { .. } => "scan",
        Effect::PickOutput { .. } => "pick-output",
        Effect::Convert { .. } => "convert",
        Effect::WriteEpub { .. } => "write-epub",
        Effect::PickStylesheet => "pick-stylesheet",
    }
}
