//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistryConfig (validated, immutable)
//!     → LoggerRegistry::from_config (pre-registers loggers)
//! ```
//!
//! # Design Decisions
//! - Config is read once; there is no reload, since loggers cannot be reconfigured
//! - All fields have defaults to allow minimal configs
//! - Level strings stay strings here and are coerced to thresholds on use

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggerConfig, RegistryConfig};
pub use validation::ValidationError;
