//! The single capability the uploader needs from a network layer.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{UploadRequest, UploadResult};

/// Sends one validated request and reports what the server said.
///
/// Implementations return `Ok` for every completed HTTP exchange, whatever
/// the status code. `Err` means no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &UploadRequest) -> Result<UploadResult, AppError>;
}

enum Script {
    Respond(UploadResult),
    Fail(String),
}

/// Scripted stand-in for the HTTP transport.
///
/// Returns the same canned outcome for every call and records each request.
///
/// ```
/// use trtc_core::{MockTransport, UploadResult};
///
/// let mock = MockTransport::responding(UploadResult::from_response(200, "OK"));
/// assert!(!mock.was_invoked());
/// ```
pub struct MockTransport {
    script: Script,
    calls: Mutex<Vec<UploadRequest>>,
}

impl MockTransport {
    pub fn responding(result: UploadResult) -> Self {
        Self::with_script(Script::Respond(result))
    }

    /// Every call fails with [`AppError::Transport`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(message.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<UploadRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn was_invoked(&self) -> bool {
        !self
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &UploadRequest) -> Result<UploadResult, AppError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match &self.script {
            Script::Respond(result) => Ok(result.clone()),
            Script::Fail(message) => Err(AppError::Transport(message.clone())),
        }
    }
}
