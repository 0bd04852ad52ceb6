use crate::engine::ConvertRequest;
use std::path::PathBuf;

mod core;
mod navigation;
mod settings;
mod workflow;

/// Work that must be performed outside the pure reducer. Each variant is one
/// suspension point; its completion comes back as a `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    PickInput,
    Scan {
        input: PathBuf,
    },
    PickOutput {
        suggested_name: String,
    },
    Convert {
        output: PathBuf,
        request: ConvertRequest,
    },
    WriteEpub {
        output: PathBuf,
        bytes: Vec<u8>,
    },
    PickStylesheet,
}
