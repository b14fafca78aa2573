//! trtc Core - Domain types, error handling, configuration and upload orchestration.

pub mod config;
pub mod error;
pub mod models;
pub mod transport;
pub mod uploader;

pub use config::{
    default_config_path, AppConfig, TransportConfig, DEFAULT_ENDPOINT, DEFAULT_LOG_FILE,
    DEFAULT_TIMEOUT,
};
pub use error::AppError;
pub use models::{CategoryPaths, FileCategory, ManifestEntry, UploadRequest, UploadResult};
pub use transport::{MockTransport, Transport};
pub use uploader::Uploader;
