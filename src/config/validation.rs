//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect loggers declared twice with conflicting levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Empty logger names are legal registry keys and are not rejected

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RegistryConfig;
use crate::logging::Threshold;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The same logger is declared twice with different levels. Only the
    /// first declaration would take effect.
    #[error("logger '{name}' declared as {first} and again as {second}")]
    ConflictingLevel {
        name: String,
        first: Threshold,
        second: Threshold,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut seen: HashMap<&str, Threshold> = HashMap::new();
    let mut errors = Vec::new();

    for logger in &config.loggers {
        let threshold = logger.threshold();
        match seen.get(logger.name.as_str()) {
            Some(&first) if first != threshold => {
                errors.push(ValidationError::ConflictingLevel {
                    name: logger.name.clone(),
                    first,
                    second: threshold,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(logger.name.as_str(), threshold);
            }
        }
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
    use crate::config::schema::LoggerConfig;

    fn entry(name: &str, level: &str) -> LoggerConfig {
        LoggerConfig {
            name: name.to_string(),
            level: level.to_string(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = RegistryConfig {
            loggers: vec![entry("a", "DEBUG"), entry("b", "INFO"), entry("", "INFO")],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_repeated_with_same_effective_level() {
        // "BOGUS" coerces to INFO, so this is not a conflict.
        let config = RegistryConfig {
            loggers: vec![entry("a", "INFO"), entry("a", "BOGUS")],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_conflicts() {
        let config = RegistryConfig {
            loggers: vec![
                entry("a", "DEBUG"),
                entry("b", "INFO"),
                entry("a", "INFO"),
                entry("b", "DEBUG"),
            ],
            ..Default::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            ValidationError::ConflictingLevel {
                name: "a".into(),
                first: Threshold::Debug,
                second: Threshold::Info,
            }
        );
        assert_eq!(errors[1].to_string(), "logger 'b' declared as INFO and again as DEBUG");
    }
}
