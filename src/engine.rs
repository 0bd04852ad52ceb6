//! Request/response boundary to the external conversion engine.
//!
//! The GUI never parses Aozora text itself. It asks an engine to `scan` a file
//! for its title and author, and to `convert` it into a complete EPUB buffer.
//! [`ProcessEngine`] talks to an `ayame`-compatible executable; tests
//! substitute fakes.

use crate::settings::{Encoding, MIYABI_STYLESHEET, PRELUDE_STYLESHEET};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Title and author extracted by a scan.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NovelMetadata {
    pub title: String,
    pub author: String,
}

impl NovelMetadata {
    /// Placeholder for a file the engine could not scan.
    pub fn unreadable() -> Self {
        NovelMetadata {
            title: "読み込みエラー".to_string(),
            author: "不明".to_string(),
        }
    }

    pub fn suggested_file_name(&self) -> String {
        format!("{}.epub", self.title)
    }
}

/// Everything the engine needs for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// Built-in names or stylesheet paths, in application order.
    pub stylesheets: Vec<String>,
    pub vertical: bool,
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("scan failed: {0}")]
    Scan(String),
    /// The engine has no `scan` command.
    #[error("engine does not support metadata scanning: {0}")]
    ScanUnsupported(String),
    #[error("conversion failed: {0}")]
    Convert(String),
    #[error("engine returned unexpected output: {0}")]
    Protocol(String),
}

#[async_trait]
pub trait ConversionEngine: Send + Sync {
    async fn scan_file(&self, path: &Path) -> Result<NovelMetadata, EngineError>;

    /// Returns the whole EPUB or an error; never a partial buffer.
    async fn convert_file(&self, request: &ConvertRequest) -> Result<Vec<u8>, EngineError>;
}

/// Runs a command-line engine as a child process.
///
/// `epub <source> [--sjis] [--horizontal] [--css NAME].. --output DIR` writes
/// `DIR/<stem>.epub`; this is the stock `ayame` CLI interface.
///
/// `scan <source>` must print `{"title": .., "author": ..}` on stdout. The
/// stock CLI only ships `xhtml` and `epub`, so scanning needs a wrapper or an
/// extended build. A scanner should try UTF-8 first and fall back to
/// Shift_JIS, since the declared encoding is not known before the upload.
/// An engine that rejects the subcommand yields
/// [`EngineError::ScanUnsupported`].
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
    base_args: Vec<String>,
}

impl ProcessEngine {
    pub fn new(program: impl Into<PathBuf>, base_args: Vec<String>) -> Self {
        ProcessEngine {
            program: program.into(),
            base_args,
        }
    }

    async fn spawn(&self, args: Vec<OsString>) -> Result<Output> {
        debug!(program = %self.program.display(), ?args, "Invoking conversion engine");
        Command::new(&self.program)
            .args(&self.base_args)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to launch `{}`", self.program.display()))
    }

    async fn run(&self, args: Vec<OsString>) -> Result<Vec<u8>> {
        let output = self.spawn(args).await?;
        if !output.status.success() {
            bail!(self.exit_failure(&output));
        }
        Ok(output.stdout)
    }

    fn exit_failure(&self, output: &Output) -> String {
        format!(
            "`{}` exited with {}: {}",
            self.program.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )
    }
}

#[async_trait]
impl ConversionEngine for ProcessEngine {
    async fn scan_file(&self, path: &Path) -> Result<NovelMetadata, EngineError> {
        let output = self
            .spawn(vec!["scan".into(), path.as_os_str().to_owned()])
            .await
            .map_err(|err| EngineError::Scan(format!("{err:#}")))?;
        if !output.status.success() {
            let message = self.exit_failure(&output);
            if rejects_subcommand(&output.stderr) {
                warn!(program = %self.program.display(), "Engine has no scan command");
                return Err(EngineError::ScanUnsupported(message));
            }
            return Err(EngineError::Scan(message));
        }
        serde_json::from_slice(&output.stdout)
            .map_err(|err| EngineError::Protocol(err.to_string()))
    }

    async fn convert_file(&self, request: &ConvertRequest) -> Result<Vec<u8>, EngineError> {
        let stem = request
            .input
            .file_stem()
            .ok_or_else(|| {
                EngineError::Convert(format!(
                    "cannot derive a file name from {}",
                    request.input.display()
                ))
            })?
            .to_owned();
        let workdir = tempfile::tempdir()
            .map_err(|err| EngineError::Convert(format!("temporary directory: {err}")))?;

        let stylesheets = usable_stylesheets(&request.stylesheets).await;
        let stdout = self
            .run(epub_args(request, &stylesheets, workdir.path()))
            .await
            .map_err(|err| EngineError::Convert(format!("{err:#}")))?;
        if !stdout.is_empty() {
            debug!(output = %String::from_utf8_lossy(&stdout).trim(), "Engine output");
        }

        let mut produced = stem;
        produced.push(".epub");
        let produced = workdir.path().join(produced);
        let bytes = tokio::fs::read(&produced).await.map_err(|err| {
            EngineError::Protocol(format!("missing {}: {err}", produced.display()))
        })?;
        if bytes.is_empty() {
            return Err(EngineError::Protocol("engine produced an empty EPUB".to_string()));
        }
        info!(bytes = bytes.len(), "Engine produced EPUB");
        Ok(bytes)
    }
}

/// clap reports an unknown subcommand this way and exits with status 2.
fn rejects_subcommand(stderr: &[u8]) -> bool {
    String::from_utf8_lossy(stderr).contains("unrecognized subcommand")
}

/// Drop custom stylesheets that are missing or unreadable. The engine aborts
/// the whole conversion on a bad `--css`, so a stale path is skipped instead.
async fn usable_stylesheets(stylesheets: &[String]) -> Vec<String> {
    let mut usable = Vec::with_capacity(stylesheets.len());
    for stylesheet in stylesheets {
        if stylesheet == PRELUDE_STYLESHEET || stylesheet == MIYABI_STYLESHEET {
            usable.push(stylesheet.clone());
            continue;
        }
        match tokio::fs::read_to_string(stylesheet).await {
            Ok(_) => usable.push(stylesheet.clone()),
            Err(err) => warn!(path = %stylesheet, "Skipping stylesheet: {err}"),
        }
    }
    usable
}

fn epub_args(request: &ConvertRequest, stylesheets: &[String], output_dir: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["epub".into(), request.input.as_os_str().to_owned()];
    if request.encoding == Encoding::ShiftJis {
        args.push("--sjis".into());
    }
    if !request.vertical {
        args.push("--horizontal".into());
    }
    for stylesheet in stylesheets {
        args.push("--css".into());
        args.push(stylesheet.into());
    }
    args.push("--output".into());
    args.push(output_dir.as_os_str().to_owned());
    args
}
