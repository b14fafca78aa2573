//! Command handlers. Output goes to the writer passed in; `main` hands them stdout.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::{error, info, warn};
use trtc_core::{AppConfig, AppError, CategoryPaths, Transport, Uploader};

use crate::settings::{self, ConfigUpdate};

/// Upload the selected files and print the server's answer.
///
/// A rejected upload (non-200) prints the status and body, then returns `Err`
/// so the process exits non-zero.
pub async fn upload<T: Transport>(
    uploader: &Uploader<T>,
    api_key: &str,
    paths: &CategoryPaths,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let result = uploader
        .upload_from_paths(api_key, paths)
        .await
        .map_err(hard_failure)?;

    if result.success {
        writeln!(out, "Upload successful!")?;
        writeln!(out, "{}", result.message)?;
        Ok(())
    } else {
        warn!(status = result.status_code, "Upload rejected by server");
        writeln!(out, "Upload failed with status code {}", result.status_code)?;
        writeln!(out, "{}", result.message)?;
        anyhow::bail!("upload failed")
    }
}

/// Logs an aborted upload and converts it for display
pub fn hard_failure(err: AppError) -> anyhow::Error {
    if err.is_local() {
        error!(error = %err, "Upload aborted before anything was sent");
        anyhow::anyhow!(err.user_message())
    } else {
        error!(error = %err, "Upload failed without a response");
        anyhow::anyhow!(
            "{}\n   No response was received; the server may not have the files.",
            err.user_message()
        )
    }
}

/// Print the stored configuration
pub fn show_config(config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", settings::describe(config))?;
    Ok(())
}

/// Apply `config set` values and persist them
pub fn set_config(
    config: &mut AppConfig,
    update: ConfigUpdate,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if update.is_empty() {
        writeln!(out, "No configuration values were provided.")?;
        return show_config(config, out);
    }

    for setting in update.apply(config) {
        info!(setting, "Configuration value updated");
    }
    if config.ignore_cert_error {
        warn!("Certificate verification will be skipped for uploads");
    }

    config.save(path).context("Failed to save configuration")?;
    writeln!(out, "Configuration saved successfully.")?;
    Ok(())
}
