use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::FmtSubscriber;

/// Resolves the configured log file against the working directory.
pub fn resolve_log_path(log_file: &str) -> anyhow::Result<PathBuf> {
    std::path::absolute(log_file)
        .with_context(|| format!("Failed to get absolute path for log file {}", log_file))
}

/// Installs the global subscriber: stderr (stdout stays clean for results)
/// plus an append-only copy in `log_file`.
pub fn init(log_file: &Path, level: Level) -> anyhow::Result<()> {
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(std::io::stderr.and(Arc::new(file)))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_log_path() {
        let path = resolve_log_path("log.txt").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("log.txt"));
    }

    #[test]
    fn test_resolve_absolute_log_path_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("trtc.log");
        let path = resolve_log_path(target.to_str().unwrap()).unwrap();
        assert_eq!(path, target);
    }

    #[test]
    fn test_resolve_empty_log_path_fails() {
        assert!(resolve_log_path("").is_err());
    }
}
