//! Configuration types for trtc components.
//!
//! [`TransportConfig`] is what the HTTP transport needs and is fixed for the
//! lifetime of a transport. [`AppConfig`] is the persisted TOML file the CLI
//! reads and edits; the core never touches it on its own.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;

/// Endpoint used when the configuration file does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://rts.tnreversetransfer.org/api/Upload";

/// Log file used when the configuration file does not name one.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Request timeout for uploads. Large exports over slow links need the headroom.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Directory name under the platform config dir.
const APP_DIR: &str = "trtc";
const CONFIG_FILE: &str = "config.toml";

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    endpoint: String,
    skip_cert_verification: bool,
    timeout: Duration,
}

impl TransportConfig {
    /// Creates a config with the default 10 minute timeout.
    ///
    /// `skip_cert_verification` disables TLS certificate checks entirely. It
    /// exists for self-signed or internal deployments and weakens transport
    /// security; leave it `false` unless the server is known.
    pub fn new(endpoint: impl Into<String>, skip_cert_verification: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            skip_cert_verification,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn skip_cert_verification(&self) -> bool {
        self.skip_cert_verification
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Persisted application settings.
///
/// ```toml
/// api_key = ""
/// api_endpoint = "https://rts.tnreversetransfer.org/api/Upload"
/// log_file = "log.txt"
/// ignore_cert_error = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: String,
    pub api_endpoint: String,
    pub log_file: String,
    pub ignore_cert_error: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            ignore_cert_error: false,
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`, writing defaults there first if it is missing.
    pub fn load_or_init(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            info!(path = %path.display(), "Created default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Writes the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Config(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            AppError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Transport settings derived from this file.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig::new(self.api_endpoint.clone(), self.ignore_cert_error)
    }
}

/// Returns `<config dir>/trtc/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| AppError::Config("cannot determine the user config directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_transport_config_defaults() {
        let config = TransportConfig::new("https://example.org/upload", false);
        assert_eq!(config.endpoint(), "https://example.org/upload");
        assert!(!config.skip_cert_verification());
        assert_eq!(config.timeout(), Duration::from_secs(600));
    }

    #[test]
    fn test_transport_config_with_timeout() {
        let config = TransportConfig::new("https://example.org", true)
            .with_timeout(Duration::from_secs(5));
        assert!(config.skip_cert_verification());
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_key, "");
        assert_eq!(config.api_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_file, "log.txt");
        assert!(!config.ignore_cert_error);
    }

    #[test]
    fn test_load_or_init_creates_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            api_key: "test-api-key".to_string(),
            api_endpoint: "https://test-endpoint.com".to_string(),
            log_file: "test-log.txt".to_string(),
            ignore_cert_error: true,
        };
        config.save(&path).unwrap();

        let loaded = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ignore_cert_error = true\n").unwrap();

        let loaded = AppConfig::load_or_init(&path).unwrap();
        assert!(loaded.ignore_cert_error);
        assert_eq!(loaded.api_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(loaded.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_endpoint = [unterminated").unwrap();

        let result = AppConfig::load_or_init(&path);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_transport_config_from_app_config() {
        let config = AppConfig {
            ignore_cert_error: true,
            ..AppConfig::default()
        };
        let transport = config.transport_config();
        assert_eq!(transport.endpoint(), DEFAULT_ENDPOINT);
        assert!(transport.skip_cert_verification());
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
    }
}
