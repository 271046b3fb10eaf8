use std::env;
use std::fmt;

use crate::form::validation::ValidationConfig;

/// Distinguishes runtime behavior for different stages of the intake demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_upload_bytes = match env::var("APP_MAX_UPLOAD_BYTES") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidMaxUploadBytes { value: raw })?,
            ),
            Err(_) => None,
        };

        let statement_min_chars = match env::var("APP_STATEMENT_MIN_CHARS") {
            Ok(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|_| ConfigError::InvalidStatementMinChars { value: raw })?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            intake: IntakeConfig {
                max_upload_bytes,
                statement_min_chars,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Environment overrides for the validator bounds. Unset fields fall back
/// to the schema defaults.
#[derive(Debug, Clone, Default)]
pub struct IntakeConfig {
    pub max_upload_bytes: Option<u64>,
    pub statement_min_chars: Option<usize>,
}

impl IntakeConfig {
    pub fn validation_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::default();
        if let Some(max_upload_bytes) = self.max_upload_bytes {
            config.max_upload_bytes = max_upload_bytes;
        }
        if let Some(statement_min_chars) = self.statement_min_chars {
            config.statement_min_chars = statement_min_chars;
        }
        config
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    InvalidMaxUploadBytes { value: String },
    InvalidStatementMinChars { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxUploadBytes { value } => {
                write!(f, "APP_MAX_UPLOAD_BYTES must be a byte count, got '{value}'")
            }
            ConfigError::InvalidStatementMinChars { value } => {
                write!(
                    f,
                    "APP_STATEMENT_MIN_CHARS must be a character count, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_overrides_apply_on_top_of_defaults() {
        let intake = IntakeConfig {
            max_upload_bytes: Some(1024),
            statement_min_chars: None,
        };

        let config = intake.validation_config();

        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.statement_min_chars, 50);
    }

    #[test]
    fn environment_labels_parse_round_trip() {
        assert_eq!(AppEnvironment::from_str("production").label(), "production");
        assert_eq!(AppEnvironment::from_str("CI").label(), "test");
        assert_eq!(AppEnvironment::from_str("anything-else").label(), "development");
    }
}
