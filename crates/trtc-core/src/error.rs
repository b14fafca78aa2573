use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::FileCategory;

/// Application-wide error types.
///
/// Every variant ends the current upload attempt; none are retried. A server
/// that answers with a non-200 status is not an error here: that outcome is
/// reported through [`UploadResult`](crate::UploadResult) instead.
///
/// # Examples
///
/// ```
/// use trtc_core::AppError;
///
/// let err = AppError::Validation("API key is required".to_string());
/// assert_eq!(err.to_string(), "API key is required");
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller input was missing or malformed. No I/O was attempted.
    #[error("{0}")]
    Validation(String),

    /// A manifest entry points at a file that is not on disk.
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A caller-supplied path could not be made absolute.
    #[error("failed to get absolute path for {category} file: {source}")]
    PathResolution {
        category: FileCategory,
        #[source]
        source: io::Error,
    },

    /// The request could not be delivered and no response was obtained.
    ///
    /// Covers DNS and connection failures, TLS handshake failures, the
    /// request timeout, and files that became unreadable after validation.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// The configuration file could not be located, read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileNotFound(path) => {
                format!(
                    "File does not exist: {}\n   Check the path and try again.",
                    path.display()
                )
            }
            AppError::Transport(msg) => {
                if msg.contains("timed out") {
                    "Upload timed out. The server may be slow or unreachable.\n   Try again later or check your connection.".to_string()
                } else if msg.contains("certificate") || msg.contains("tls") || msg.contains("TLS") {
                    format!(
                        "Secure connection failed: {}\n   If the server uses a self-signed certificate, see `trtc config set --ignore-cert-error true`.",
                        msg
                    )
                } else if msg.contains("connect") {
                    format!(
                        "Cannot connect to server: {}\n   Check your internet connection and the endpoint URL.",
                        msg
                    )
                } else {
                    format!("Upload could not be sent: {}", msg)
                }
            }
            AppError::InvalidEndpoint(url) => {
                format!(
                    "Invalid endpoint URL: {}\n   Example: https://rts.tnreversetransfer.org/api/Upload",
                    url
                )
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if no bytes left the machine before the failure.
    pub fn is_local(&self) -> bool {
        !matches!(self, AppError::Transport(_))
    }
}
