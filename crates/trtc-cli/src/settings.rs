//! Editing of the persisted configuration from `trtc config set`.

use trtc_core::AppConfig;

/// Values given to `config set`. `None` leaves the stored value alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub endpoint: Option<String>,
    pub log_file: Option<String>,
    pub ignore_cert_error: Option<bool>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.endpoint.is_none() && self.log_file.is_none() && self.ignore_cert_error.is_none()
    }

    /// Applies the given values and returns the names of the settings changed.
    pub fn apply(self, config: &mut AppConfig) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(endpoint) = self.endpoint.filter(|e| !e.is_empty()) {
            config.api_endpoint = endpoint;
            changed.push("api_endpoint");
        }
        if let Some(log_file) = self.log_file.filter(|f| !f.is_empty()) {
            config.log_file = log_file;
            changed.push("log_file");
        }
        if let Some(ignore) = self.ignore_cert_error {
            config.ignore_cert_error = ignore;
            changed.push("ignore_cert_error");
        }

        changed
    }
}

/// Human-readable listing printed by `config get`.
pub fn describe(config: &AppConfig) -> String {
    format!(
        "Current Configuration:\nAPI Endpoint: {}\nLog File: {}\nIgnore Certificate Errors: {}",
        config.api_endpoint, config.log_file, config.ignore_cert_error
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut config = AppConfig::default();
        let update = ConfigUpdate::default();

        assert!(update.is_empty());
        assert!(update.apply(&mut config).is_empty());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_apply_only_given_values() {
        let mut config = AppConfig::default();
        let update = ConfigUpdate {
            endpoint: Some("https://test-endpoint.com".to_string()),
            log_file: None,
            ignore_cert_error: Some(true),
        };

        let changed = update.apply(&mut config);

        assert_eq!(changed, vec!["api_endpoint", "ignore_cert_error"]);
        assert_eq!(config.api_endpoint, "https://test-endpoint.com");
        assert_eq!(config.log_file, "log.txt");
        assert!(config.ignore_cert_error);
    }

    #[test]
    fn test_apply_can_clear_ignore_cert_error() {
        let mut config = AppConfig {
            ignore_cert_error: true,
            ..AppConfig::default()
        };
        let update = ConfigUpdate {
            ignore_cert_error: Some(false),
            ..ConfigUpdate::default()
        };

        update.apply(&mut config);
        assert!(!config.ignore_cert_error);
    }

    #[test]
    fn test_describe_omits_api_key() {
        let config = AppConfig {
            api_key: "secret".to_string(),
            ..AppConfig::default()
        };
        let text = describe(&config);

        assert!(text.contains("API Endpoint: https://rts.tnreversetransfer.org/api/Upload"));
        assert!(text.contains("Ignore Certificate Errors: false"));
        assert!(!text.contains("secret"));
    }
}
