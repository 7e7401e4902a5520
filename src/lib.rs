//! Named logger registry.
//!
//! ```
//! use log_registry::{LoggerRegistry, Threshold};
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.get_or_create_logger("calibration", Threshold::Debug);
//! logger.debug("table loaded");
//!
//! // Same name, same logger; the second threshold is ignored.
//! let again = registry.get_or_create_logger("calibration", Threshold::Info);
//! assert!(std::sync::Arc::ptr_eq(&logger, &again));
//! ```

pub mod config;
pub mod logging;
pub mod registry;

pub use config::RegistryConfig;
pub use logging::{Logger, Severity, Threshold};
pub use registry::{setup_logger, LoggerRegistry};
