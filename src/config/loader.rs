//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GuardConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GuardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GuardConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [breaker]
            failure_threshold = 5
            success_threshold = 1
            open_timeout_ms = 250

            [target]
            url = "http://127.0.0.1:3000/health"
            request_timeout_ms = 500

            [supervisor]
            interval_ms = 100

            [observability]
            log_level = "debug"
            log_format = "json"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.breaker.failure_threshold, 5);
        assert_eq!(config.breaker.success_threshold, 1);
        assert_eq!(config.breaker.open_timeout_ms, 250);
        assert_eq!(config.target.url, "http://127.0.0.1:3000/health");
        assert_eq!(config.supervisor.interval_ms, 100);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = write_config("");
        assert_eq!(load_config(file.path()).unwrap(), GuardConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/circuit-guard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[breaker\nfailure_threshold = 3");
        assert!(matches!(load_config(file.path()).unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type() {
        let file = write_config("[breaker]\nfailure_threshold = \"three\"");
        assert!(matches!(load_config(file.path()).unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_are_all_reported() {
        let file = write_config("[breaker]\nfailure_threshold = 0\nsuccess_threshold = 0");

        let err = load_config(file.path()).unwrap_err();
        let message = err.to_string();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(message.contains("failure_threshold"));
        assert!(message.contains("success_threshold"));
    }
}
