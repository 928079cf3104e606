use std::str::FromStr;
use thiserror::Error;

use crate::config::{ApiSettings, LoggingSettings, ServerSettings, Settings, UiSettings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Check every section and report all problems at once
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(Self::validate_server(&settings.server));
        errors.extend(Self::validate_api(&settings.api));
        errors.extend(Self::validate_ui(&settings.ui));
        errors.extend(Self::validate_logging(&settings.logging));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        errors
    }

    fn validate_api(api: &ApiSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if api.base_url.is_empty() {
            errors.push(ValidationError::MissingField("api.base_url".to_string()));
        } else {
            match reqwest::Url::parse(&api.base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(ValidationError::InvalidValue {
                    field: "api.base_url".to_string(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                }),
                Err(e) => errors.push(ValidationError::InvalidValue {
                    field: "api.base_url".to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if api.timeout_seconds == Some(0) {
            errors.push(ValidationError::InvalidValue {
                field: "api.timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0 (omit it for no timeout)".to_string(),
            });
        }

        errors
    }

    fn validate_ui(ui: &UiSettings) -> Vec<ValidationError> {
        match &ui.dist_dir {
            Some(dir) if !dir.is_dir() => vec![ValidationError::InvalidValue {
                field: "ui.dist_dir".to_string(),
                reason: format!("'{}' is not a directory", dir.display()),
            }],
            _ => Vec::new(),
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Vec<ValidationError> {
        match tracing::Level::from_str(&logging.level) {
            Ok(_) => Vec::new(),
            Err(_) => vec![ValidationError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("unknown level '{}'", logging.level),
            }],
        }
    }
}
