//! File logging for the interactive session.
//!
//! The menu owns stdout, so tracing output goes to a daily-rotated file
//! instead of the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File name prefix; the appender adds the date suffix.
pub const LOG_FILE_PREFIX: &str = "roster.log";

/// Install the global subscriber writing to `log_dir` (or the platform
/// default).
///
/// The returned guard flushes the background writer on drop; keep it alive
/// for the whole process.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = prepare_log_dir(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

/// Resolve and create the log directory.
pub fn prepare_log_dir(log_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

/// Platform data directory for logs.
///
/// - Linux: `~/.local/share/roster/logs` (or `$XDG_DATA_HOME/roster/logs`)
/// - macOS: `~/Library/Application Support/roster/logs`
/// - Windows: `%APPDATA%\roster\data\logs`
/// - Fallback: `<tmp>/roster/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("roster"))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b");

        let dir = prepare_log_dir(Some(&target)).unwrap();

        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    #[test]
    fn existing_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();

        let dir = prepare_log_dir(Some(tmp.path())).unwrap();

        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn default_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }
}
