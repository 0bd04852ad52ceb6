//! Entry point for the Aozora Bunko to EPUB converter.
//!
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or `--config`).
//! - Wire the conversion engine and native dialogs into the GUI.

mod app;
mod config;
mod dialogs;
mod engine;
mod output;
mod settings;
#[cfg(test)]
mod test_fixtures;

use crate::app::{Boundary, run_app};
use crate::config::load_config;
use crate::dialogs::NativeDialogs;
use crate::engine::ProcessEngine;
use anyhow::{Context, Result, anyhow, bail};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str = "Usage: ayame-app [--config <path>] [<novel.txt|novel.zip>]";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if let Some(input) = args.input.as_deref().filter(|path| !path.is_file()) {
        bail!("File not found: {}", input.display());
    }

    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        config = %args.config_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting converter"
    );
    info!(
        program = %config.engine_program,
        args = ?config.engine_args,
        "Active conversion engine"
    );

    let boundary = Boundary {
        engine: Arc::new(ProcessEngine::new(
            config.engine_program.clone(),
            config.engine_args.clone(),
        )),
        dialogs: Arc::new(NativeDialogs),
    };
    run_app(config, boundary, args.input).context("Failed to start the GUI")?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    config_path: PathBuf,
    input: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut input = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                config_path = PathBuf::from(path);
            }
            "--help" | "-h" => bail!("{USAGE}"),
            flag if flag.starts_with('-') => bail!("Unknown option {flag}\n{USAGE}"),
            _ if input.is_some() => bail!("Only one input file may be given\n{USAGE}"),
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    Ok(CliArgs { config_path, input })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn no_arguments_use_default_config() {
        let parsed = parse_args(Vec::new()).expect("parse");
        assert_eq!(parsed.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(parsed.input, None);
    }

    #[test]
    fn config_flag_and_input_in_any_order() {
        let parsed = parse_args(args(&["novel.zip", "--config", "alt.toml"])).expect("parse");
        assert_eq!(
            parsed,
            CliArgs {
                config_path: PathBuf::from("alt.toml"),
                input: Some(PathBuf::from("novel.zip")),
            }
        );
    }

    #[test]
    fn rejects_dangling_flag_and_second_input() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
