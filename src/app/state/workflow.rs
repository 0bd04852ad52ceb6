use crate::engine::NovelMetadata;
use std::path::{Path, PathBuf};

/// Conversion lifecycle. Scanning and Converting are the busy states; only
/// one of them can be in flight at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Workflow {
    #[default]
    Idle,
    Scanning {
        input: PathBuf,
    },
    Ready {
        input: PathBuf,
        metadata: NovelMetadata,
    },
    Converting {
        input: PathBuf,
        metadata: NovelMetadata,
        output: PathBuf,
    },
}

impl Workflow {
    /// True while a scan or convert request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, Workflow::Scanning { .. } | Workflow::Converting { .. })
    }

    pub fn input(&self) -> Option<&Path> {
        match self {
            Workflow::Idle => None,
            Workflow::Scanning { input }
            | Workflow::Ready { input, .. }
            | Workflow::Converting { input, .. } => Some(input),
        }
    }

    pub fn metadata(&self) -> Option<&NovelMetadata> {
        match self {
            Workflow::Ready { metadata, .. } | Workflow::Converting { metadata, .. } => {
                Some(metadata)
            }
            Workflow::Idle | Workflow::Scanning { .. } => None,
        }
    }

    pub fn can_upload(&self) -> bool {
        !self.is_busy()
    }

    pub fn can_download(&self) -> bool {
        matches!(self, Workflow::Ready { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workflow::Idle => "idle",
            Workflow::Scanning { .. } => "scanning",
            Workflow::Ready { .. } => "ready",
            Workflow::Converting { .. } => "converting",
        }
    }
}
