//! Upload orchestration: input validation, manifest assembly, and delegation
//! to a [`Transport`].
//!
//! Validation happens before any network cost is paid and stops at the first
//! problem found, in this order: API key, manifest presence, per-file existence.

use std::path;

use tracing::{error, info};

use crate::error::AppError;
use crate::models::{CategoryPaths, ManifestEntry, UploadRequest, UploadResult};
use crate::transport::Transport;

/// Orchestrates uploads over a fixed transport.
///
/// # Examples
///
/// ```no_run
/// use trtc_core::{CategoryPaths, FileCategory, MockTransport, UploadResult, Uploader};
///
/// # async fn example() -> Result<(), trtc_core::AppError> {
/// let uploader = Uploader::new(MockTransport::responding(UploadResult::from_response(200, "OK")));
/// let paths = CategoryPaths::new().set(FileCategory::Courses, "exports/courses.csv");
/// let result = uploader.upload_from_paths("my-key", &paths).await?;
/// assert!(result.success);
/// # Ok(())
/// # }
/// ```
pub struct Uploader<T> {
    transport: T,
}

impl<T: Transport> Uploader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds a manifest from the non-empty paths and uploads it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PathResolution` if a path cannot be made absolute.
    /// Returns `AppError::Validation` if every path is empty.
    /// Otherwise fails as [`Uploader::upload`] does.
    pub async fn upload_from_paths(
        &self,
        api_key: &str,
        paths: &CategoryPaths,
    ) -> Result<UploadResult, AppError> {
        let mut entries = Vec::new();

        for (category, raw) in paths.selected() {
            let absolute = path::absolute(raw).map_err(|source| {
                error!(%category, path = %raw.display(), "Failed to resolve path");
                AppError::PathResolution { category, source }
            })?;
            entries.push(ManifestEntry::new(category, absolute));
        }

        if entries.is_empty() {
            error!("No files selected for upload");
            return Err(AppError::Validation(
                "at least one file must be specified".to_string(),
            ));
        }

        self.upload(api_key, entries).await
    }

    /// Validates the request and hands it to the transport.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an empty key or manifest.
    /// Returns `AppError::FileNotFound` naming the first missing file.
    /// Returns `AppError::Transport` if the request could not be delivered.
    pub async fn upload(
        &self,
        api_key: &str,
        entries: Vec<ManifestEntry>,
    ) -> Result<UploadResult, AppError> {
        if api_key.is_empty() {
            error!("Upload rejected: API key is missing");
            return Err(AppError::Validation("API key is required".to_string()));
        }

        if entries.is_empty() {
            error!("Upload rejected: no files in manifest");
            return Err(AppError::Validation(
                "at least one file is required".to_string(),
            ));
        }

        for entry in &entries {
            if !matches!(tokio::fs::try_exists(&entry.path).await, Ok(true)) {
                error!(category = %entry.category, path = %entry.path.display(), "File does not exist");
                return Err(AppError::FileNotFound(entry.path.clone()));
            }
        }

        info!(files = entries.len(), "Starting upload");

        let request = UploadRequest {
            api_key: api_key.to_string(),
            entries,
        };

        self.transport.send(&request).await
    }
}
