//! In-memory stand-ins for the engine and the native dialogs.

use crate::dialogs::{DialogError, FileDialogs};
use crate::engine::{ConversionEngine, ConvertRequest, EngineError, NovelMetadata};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub fn botchan() -> NovelMetadata {
    NovelMetadata {
        title: "坊っちゃん".to_string(),
        author: "夏目漱石".to_string(),
    }
}

/// Engine returning canned results and recording every call.
pub struct FakeEngine {
    scan_result: Result<NovelMetadata, EngineError>,
    convert_result: Result<Vec<u8>, EngineError>,
    pub scans: Mutex<Vec<PathBuf>>,
    pub converts: Mutex<Vec<ConvertRequest>>,
}

impl FakeEngine {
    pub fn new(
        scan_result: Result<NovelMetadata, EngineError>,
        convert_result: Result<Vec<u8>, EngineError>,
    ) -> Self {
        FakeEngine {
            scan_result,
            convert_result,
            scans: Mutex::new(Vec::new()),
            converts: Mutex::new(Vec::new()),
        }
    }

    pub fn converts(&self) -> Vec<ConvertRequest> {
        self.converts.lock().expect("converts lock").clone()
    }

    pub fn scans(&self) -> Vec<PathBuf> {
        self.scans.lock().expect("scans lock").clone()
    }
}

#[async_trait]
impl ConversionEngine for FakeEngine {
    async fn scan_file(&self, path: &Path) -> Result<NovelMetadata, EngineError> {
        self.scans.lock().expect("scans lock").push(path.to_path_buf());
        self.scan_result.clone()
    }

    async fn convert_file(&self, request: &ConvertRequest) -> Result<Vec<u8>, EngineError> {
        self.converts
            .lock()
            .expect("converts lock")
            .push(request.clone());
        self.convert_result.clone()
    }
}

type Answer = Result<Option<PathBuf>, DialogError>;

/// Dialogs answering from scripted queues; an empty queue means "cancel".
#[derive(Default)]
pub struct FakeDialogs {
    inputs: Mutex<VecDeque<Answer>>,
    outputs: Mutex<VecDeque<Answer>>,
    stylesheets: Mutex<VecDeque<Answer>>,
    pub suggested_names: Mutex<Vec<String>>,
}

impl FakeDialogs {
    pub fn with_input(self, answer: Answer) -> Self {
        self.inputs.lock().expect("inputs lock").push_back(answer);
        self
    }

    pub fn with_output(self, answer: Answer) -> Self {
        self.outputs.lock().expect("outputs lock").push_back(answer);
        self
    }

    pub fn with_stylesheet(self, answer: Answer) -> Self {
        self.stylesheets
            .lock()
            .expect("stylesheets lock")
            .push_back(answer);
        self
    }

    pub fn suggested_names(&self) -> Vec<String> {
        self.suggested_names.lock().expect("names lock").clone()
    }
}

#[async_trait]
impl FileDialogs for FakeDialogs {
    async fn pick_input(&self) -> Result<Option<PathBuf>, DialogError> {
        self.inputs
            .lock()
            .expect("inputs lock")
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn pick_output(&self, suggested_name: &str) -> Result<Option<PathBuf>, DialogError> {
        self.suggested_names
            .lock()
            .expect("names lock")
            .push(suggested_name.to_string());
        self.outputs
            .lock()
            .expect("outputs lock")
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn pick_stylesheet(&self) -> Result<Option<PathBuf>, DialogError> {
        self.stylesheets
            .lock()
            .expect("stylesheets lock")
            .pop_front()
            .unwrap_or(Ok(None))
    }
}
