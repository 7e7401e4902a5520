//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::logging::Threshold;

/// Root configuration for a logger registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Level used by the CLI when no `--level` is given ("DEBUG" or "INFO").
    pub default_level: String,

    /// Loggers registered up front, in declaration order.
    pub loggers: Vec<LoggerConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            loggers: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn default_threshold(&self) -> Threshold {
        Threshold::from_level_name(&self.default_level)
    }
}

/// A logger to pre-register.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Logger name (registry key). May be empty.
    pub name: String,

    /// Level name; anything other than "DEBUG" means INFO.
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggerConfig {
    pub fn threshold(&self) -> Threshold {
        Threshold::from_level_name(&self.level)
    }
}

fn default_level() -> String {
    "INFO".to_string()
}
