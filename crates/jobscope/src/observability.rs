//! Logging setup.
//!
//! Console output goes to stderr and is governed by `-q`/`-v` (or `RUST_LOG`).
//! An optional log file receives events at the configured `log_level`.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "JOBSCOPE_LOG_PATH";
const LOG_DIR_ENV: &str = "JOBSCOPE_LOG_DIR";
const LOG_FILE_NAME: &str = "jobscope.log";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file path.
    pub log_path: Option<PathBuf>,
    /// Directory receiving `jobscope.log`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `JOBSCOPE_LOG_PATH` / `JOBSCOPE_LOG_DIR`, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, if file logging is enabled.
    fn log_file(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path
                .file_name()
                .map_or_else(|| PathBuf::from(LOG_FILE_NAME), PathBuf::from);
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Console filter: `RUST_LOG` wins, then `-q`, then `-v` count.
pub fn console_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Log file filter: `RUST_LOG` wins, then the configured level.
pub fn file_filter(config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop; keep it alive for the
/// whole run.
pub fn init_observability(
    config: &ObservabilityConfig,
    console: EnvFilter,
    file: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;
    Ok(guard)
}
