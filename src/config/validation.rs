//! Semantic configuration validation.

use std::fmt;

use crate::config::schema::AppConfig;

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyHost,
    ZeroPort,
    InvalidPort(String),
    ZeroRequestTimeout,
    ZeroBodyLimit,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyHost => write!(f, "listener.host must not be empty"),
            ValidationError::ZeroPort => write!(f, "listener.port must not be 0"),
            ValidationError::InvalidPort(raw) => {
                write!(f, "PORT environment variable is not a valid port: {raw:?}")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than 0")
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "limits.max_body_bytes must be greater than 0")
            }
        }
    }
}

/// Check a config for semantic errors, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
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
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_violations_collected() {
        let mut config = AppConfig::default();
        config.listener.host = "  ".to_string();
        config.listener.port = 0;
        config.timeouts.request_secs = 0;
        config.limits.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyHost));
        assert!(errors.contains(&ValidationError::ZeroPort));
    }
}
