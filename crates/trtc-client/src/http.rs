use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use tracing::{error, info, warn};
use trtc_core::{AppError, ManifestEntry, Transport, TransportConfig, UploadRequest, UploadResult};
use url::Url;

/// `Accept` header sent with every upload.
const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Form field carrying the raw API key.
const API_KEY_FIELD: &str = "apikey";

const FILE_MIME: &str = "application/octet-stream";

/// Live [`Transport`] that POSTs uploads as `multipart/form-data`.
///
/// Each call is an independent request/response cycle: no retries, no state
/// carried between calls.
///
/// # Examples
///
/// ```no_run
/// use trtc_client::HttpTransport;
/// use trtc_core::{TransportConfig, Uploader};
///
/// # fn example() -> Result<(), trtc_core::AppError> {
/// let config = TransportConfig::new("https://rts.tnreversetransfer.org/api/Upload", false);
/// let uploader = Uploader::new(HttpTransport::new(config)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl HttpTransport {
    /// Builds the HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEndpoint` if the endpoint is not an absolute http(s) URL.
    /// Returns `AppError::Transport` if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self, AppError> {
        let endpoint = Url::parse(config.endpoint())
            .map_err(|e| AppError::InvalidEndpoint(format!("{} ({})", config.endpoint(), e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::InvalidEndpoint(config.endpoint().to_string()));
        }

        if config.skip_cert_verification() {
            warn!(
                endpoint = %endpoint,
                "TLS certificate verification is disabled; the server's identity will not be checked"
            );
        }

        let client = Client::builder()
            .user_agent(concat!("trtc/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.skip_cert_verification())
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs: config.timeout().as_secs(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Assembles the multipart body: the key first, then one part per entry in order.
    async fn build_form(&self, request: &UploadRequest) -> Result<Form, AppError> {
        let mut form = Form::new().text(API_KEY_FIELD, request.api_key.clone());

        for entry in &request.entries {
            info!(
                category = %entry.category,
                path = %entry.path.display(),
                "Adding file"
            );
            form = form.part(entry.category.label(), file_part(entry).await?);
        }

        Ok(form)
    }

    fn classify(&self, e: reqwest::Error) -> AppError {
        let causes = causes(&e);

        if e.is_timeout() {
            AppError::Transport(format!("request timed out after {} seconds", self.timeout_secs))
        } else if is_tls_failure(&causes) {
            AppError::Transport(format!(
                "TLS handshake with {} failed: {}",
                self.endpoint, causes
            ))
        } else if e.is_connect() {
            AppError::Transport(format!("failed to connect to {}: {}", self.endpoint, causes))
        } else {
            AppError::Transport(format!("failed to send request: {}: {}", e, causes))
        }
    }
}

/// Joins the `source()` chain below `e`. The top-level reqwest message only
/// names the URL, so the useful detail lives further down.
fn causes(e: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(e.source(), |err| err.source())
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

fn is_tls_failure(causes: &str) -> bool {
    let causes = causes.to_lowercase();
    ["ssl", "tls", "certificate", "handshake"]
        .iter()
        .any(|needle| causes.contains(needle))
}

/// Streams one file from disk. The file is opened here, after validation.
async fn file_part(entry: &ManifestEntry) -> Result<Part, AppError> {
    let file = tokio::fs::File::open(&entry.path).await.map_err(|e| {
        AppError::Transport(format!(
            "failed to open file {}: {}",
            entry.path.display(),
            e
        ))
    })?;

    let length = file
        .metadata()
        .await
        .map_err(|e| {
            AppError::Transport(format!(
                "failed to read metadata for {}: {}",
                entry.path.display(),
                e
            ))
        })?
        .len();

    Part::stream_with_length(Body::from(file), length)
        .file_name(entry.file_name())
        .mime_str(FILE_MIME)
        .map_err(|e| AppError::Transport(format!("failed to create form file: {}", e)))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &UploadRequest) -> Result<UploadResult, AppError> {
        info!(endpoint = %self.endpoint, "Uploading files");

        let form = self.build_form(request).await.inspect_err(|e| {
            error!(error = %e, "Failed to assemble upload body");
        })?;

        info!(endpoint = %self.endpoint, "Sending request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, ACCEPT_VALUE)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))
            .inspect_err(|e| error!(error = %e, "Upload request failed"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("failed to read response: {}", e)))
            .inspect_err(|e| error!(error = %e, "Upload response unreadable"))?;

        let result = UploadResult::from_response(status.as_u16(), body);

        info!(status = %status, "Response received");
        if result.success {
            info!("Upload successful");
        } else {
            error!(status = result.status_code, body = %result.message, "Upload failed");
        }

        Ok(result)
    }
}
