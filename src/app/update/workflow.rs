use super::super::state::{App, Notice, PendingDialog, Workflow};
use super::Effect;
use crate::dialogs::DialogError;
use crate::engine::{ConvertRequest, EngineError, NovelMetadata};
use crate::output::WriteError;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

impl App {
    pub(super) fn handle_upload_requested(&mut self, effects: &mut Vec<Effect>) {
        if !self.can_upload() {
            debug!(
                state = self.workflow.label(),
                dialog = ?self.dialog,
                "Upload ignored"
            );
            return;
        }
        self.dialog = Some(PendingDialog::Input);
        effects.push(Effect::PickInput);
    }

    pub(super) fn handle_input_picked(
        &mut self,
        result: Result<Option<PathBuf>, DialogError>,
        effects: &mut Vec<Effect>,
    ) {
        if self.dialog != Some(PendingDialog::Input) {
            warn!("Input picker answered without a pending upload");
            return;
        }
        self.dialog = None;
        match result {
            Ok(Some(path)) => effects.extend(self.begin_scan(path)),
            Ok(None) => debug!("Upload cancelled"),
            Err(err) => {
                error!(%err, "Upload failed");
                self.notice = Some(Notice::error(format!("ファイルを開けませんでした: {err}")));
            }
        }
    }

    /// Enter `Scanning` for `input`; the previous metadata is discarded.
    pub(in crate::app) fn begin_scan(&mut self, input: PathBuf) -> Vec<Effect> {
        if self.workflow.is_busy() {
            warn!(
                state = self.workflow.label(),
                path = %input.display(),
                "Scan refused while another operation is in flight"
            );
            return Vec::new();
        }
        info!(path = %input.display(), "Input selected");
        self.notice = None;
        self.workflow = Workflow::Scanning {
            input: input.clone(),
        };
        vec![Effect::Scan { input }]
    }

    pub(super) fn handle_scan_finished(
        &mut self,
        input: PathBuf,
        result: Result<NovelMetadata, EngineError>,
    ) {
        if !matches!(&self.workflow, Workflow::Scanning { input: pending } if *pending == input) {
            warn!(
                path = %input.display(),
                state = self.workflow.label(),
                "Ignoring stale scan result"
            );
            return;
        }
        let metadata = match result {
            Ok(metadata) => {
                info!(title = %metadata.title, author = %metadata.author, "Metadata received");
                metadata
            }
            Err(err) => {
                warn!(%err, path = %input.display(), "Scan failed; using placeholder metadata");
                let text = match &err {
                    EngineError::ScanUnsupported(_) => {
                        "変換エンジンが scan コマンドに対応していないため、タイトルと著者を読み取れません"
                            .to_string()
                    }
                    _ => format!("読み込みに失敗しました: {err}"),
                };
                self.notice = Some(Notice::error(text));
                NovelMetadata::unreadable()
            }
        };
        self.workflow = Workflow::Ready { input, metadata };
    }

    pub(super) fn handle_download_requested(&mut self, effects: &mut Vec<Effect>) {
        if !self.can_download() {
            debug!(
                state = self.workflow.label(),
                dialog = ?self.dialog,
                "Download ignored"
            );
            return;
        }
        let Some(metadata) = self.metadata() else {
            return;
        };
        let suggested_name = metadata.suggested_file_name();
        self.dialog = Some(PendingDialog::Output {
            settings: self.settings.clone(),
        });
        effects.push(Effect::PickOutput { suggested_name });
    }

    pub(super) fn handle_output_picked(
        &mut self,
        result: Result<Option<PathBuf>, DialogError>,
        effects: &mut Vec<Effect>,
    ) {
        let settings = match self.dialog.take() {
            Some(PendingDialog::Output { settings }) => settings,
            other => {
                self.dialog = other;
                warn!("Save picker answered without a pending download");
                return;
            }
        };
        let output = match result {
            Ok(Some(path)) => path,
            Ok(None) => {
                debug!("Download cancelled");
                return;
            }
            Err(err) => {
                error!(%err, "Download failed");
                self.notice = Some(Notice::error(format!("保存先を選べませんでした: {err}")));
                return;
            }
        };
        let (input, metadata) = match std::mem::take(&mut self.workflow) {
            Workflow::Ready { input, metadata } => (input, metadata),
            other => {
                warn!(state = other.label(), "Download target chosen outside the ready state");
                self.workflow = other;
                return;
            }
        };

        let request = ConvertRequest {
            input: input.clone(),
            stylesheets: settings.stylesheets(),
            vertical: settings.vertical,
            encoding: settings.encoding,
        };
        info!(output = %output.display(), "Download target selected");
        self.notice = None;
        self.workflow = Workflow::Converting {
            input,
            metadata,
            output: output.clone(),
        };
        effects.push(Effect::Convert { output, request });
    }

    pub(super) fn handle_convert_finished(
        &mut self,
        output: PathBuf,
        result: Result<Vec<u8>, EngineError>,
        effects: &mut Vec<Effect>,
    ) {
        if !self.is_converting_to(&output) {
            warn!(output = %output.display(), "Ignoring stale conversion result");
            return;
        }
        match result {
            Ok(bytes) => {
                info!(bytes = bytes.len(), "Conversion finished; writing EPUB");
                effects.push(Effect::WriteEpub { output, bytes });
            }
            Err(err) => {
                error!(%err, "Conversion failed");
                self.notice = Some(Notice::error(format!("変換に失敗しました: {err}")));
                self.finish_conversion();
            }
        }
    }

    pub(super) fn handle_epub_written(&mut self, output: PathBuf, result: Result<u64, WriteError>) {
        if !self.is_converting_to(&output) {
            warn!(output = %output.display(), "Ignoring stale write result");
            return;
        }
        match result {
            Ok(bytes) => {
                info!(path = %output.display(), bytes, "Saved EPUB");
                self.notice = Some(Notice::info(format!("保存しました: {}", output.display())));
            }
            Err(err) => {
                error!(%err, "Writing EPUB failed");
                self.notice = Some(Notice::error(format!("保存に失敗しました: {err}")));
            }
        }
        self.finish_conversion();
    }

    fn is_converting_to(&self, target: &Path) -> bool {
        matches!(&self.workflow, Workflow::Converting { output, .. } if output == target)
    }

    fn finish_conversion(&mut self) {
        self.workflow = match std::mem::take(&mut self.workflow) {
            Workflow::Converting {
                input, metadata, ..
            } => Workflow::Ready { input, metadata },
            other => other,
        };
    }
}
