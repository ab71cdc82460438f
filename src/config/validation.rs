//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (thresholds > 0, interval > 0)
//! - Check the target is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GuardConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("breaker.failure_threshold must be greater than zero")]
    ZeroFailureThreshold,

    #[error("breaker.success_threshold must be greater than zero")]
    ZeroSuccessThreshold,

    #[error("supervisor.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("target.request_timeout_ms must be greater than zero")]
    ZeroRequestTimeout,

    #[error("target.url {url:?} is not a valid URL: {reason}")]
    InvalidTargetUrl { url: String, reason: String },

    #[error("target.url scheme {0:?} is not supported (expected http or https)")]
    UnsupportedScheme(String),
}

/// Check a deserialized config for values serde cannot reject on its own.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.breaker.failure_threshold == 0 {
        errors.push(ValidationError::ZeroFailureThreshold);
    }
    if config.breaker.success_threshold == 0 {
        errors.push(ValidationError::ZeroSuccessThreshold);
    }
    if config.supervisor.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.target.request_timeout_ms == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    match Url::parse(&config.target.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
        Err(e) => errors.push(ValidationError::InvalidTargetUrl {
            url: config.target.url.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GuardConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = GuardConfig::default();
        config.breaker.failure_threshold = 0;
        config.breaker.success_threshold = 0;
        config.supervisor.interval_ms = 0;
        config.target.request_timeout_ms = 0;
        config.target.url = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::ZeroFailureThreshold);
        assert_eq!(errors[1], ValidationError::ZeroSuccessThreshold);
        assert_eq!(errors[2], ValidationError::ZeroInterval);
        assert_eq!(errors[3], ValidationError::ZeroRequestTimeout);
        assert!(matches!(errors[4], ValidationError::InvalidTargetUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = GuardConfig::default();
        config.target.url = "ftp://localhost/doc.json".to_string();

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnsupportedScheme("ftp".to_string())])
        );
    }

    #[test]
    fn test_zero_open_timeout_is_allowed() {
        let mut config = GuardConfig::default();
        config.breaker.open_timeout_ms = 0;
        assert_eq!(validate_config(&config), Ok(()));
    }
}
