//! Logging setup: stderr console output plus an optional JSONL file sink.
//!
//! File logging is enabled by `WRITESCAN_LOG_PATH` (exact file),
//! `WRITESCAN_LOG_DIR`, or the config `log_dir`, in that order.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "WRITESCAN_LOG_PATH";
const LOG_DIR_ENV: &str = "WRITESCAN_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "writescan.jsonl";

/// Where logs should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, when file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = env_path.or_else(|| {
            env_dir
                .or(config_dir)
                .map(|dir| dir.join(DEFAULT_LOG_FILE))
        });
        Self { log_file }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` forces `error`, each `-v` raises
/// the level one step above `config_level`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(default_level(quiet, verbose, config_level))
}

fn default_level(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/a.jsonl")),
            Some(PathBuf::from("/var/log")),
            Some(PathBuf::from("/srv/log")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/a.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/var/log")),
            Some(PathBuf::from("/srv/log")),
        );
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/var/log").join(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn no_sources_means_no_file() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(true, 2, "info"), "error");
        assert_eq!(default_level(false, 0, "warn"), "warn");
        assert_eq!(default_level(false, 1, "info"), "debug");
        assert_eq!(default_level(false, 3, "info"), "trace");
    }
}
