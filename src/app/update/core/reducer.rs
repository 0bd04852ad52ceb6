use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Navigate(screen) => self.handle_navigate(screen),
            Message::UploadRequested => self.handle_upload_requested(&mut effects),
            Message::InputPicked(result) => self.handle_input_picked(result, &mut effects),
            Message::ScanFinished { input, result } => self.handle_scan_finished(input, result),
            Message::DownloadRequested => self.handle_download_requested(&mut effects),
            Message::OutputPicked(result) => self.handle_output_picked(result, &mut effects),
            Message::ConvertFinished { output, result } => {
                self.handle_convert_finished(output, result, &mut effects)
            }
            Message::EpubWritten { output, result } => self.handle_epub_written(output, result),
            Message::SettingsChanged(patch) => self.handle_settings_changed(patch),
            Message::AddStylesheetRequested => self.handle_add_stylesheet_requested(&mut effects),
            Message::StylesheetPicked(result) => self.handle_stylesheet_picked(result),
            Message::RemoveStylesheet(index) => self.handle_remove_stylesheet(index),
            Message::DismissNotice => self.notice = None,
        }

        effects
    }
}
