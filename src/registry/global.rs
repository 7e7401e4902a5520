//! Process-wide registry.
//!
//! The global registry is created on first use, writes to standard error,
//! and is never torn down. Prefer an owned [`LoggerRegistry`] where one can
//! be passed around; this exists for call sites that only have a name.

use std::sync::{Arc, OnceLock};

use crate::logging::{Logger, Threshold};
use crate::registry::store::LoggerRegistry;

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::new)
}

/// Get or create a logger in the process-wide registry.
///
/// `level` is a level name: exactly `"DEBUG"` selects debug output, anything
/// else selects INFO. As with [`LoggerRegistry::get_or_create_logger`], the
/// level only applies on the first call for `name`.
pub fn setup_logger(name: &str, level: &str) -> Arc<Logger> {
    global().get_or_create_logger(name, Threshold::from_level_name(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));

        let first = setup_logger("global::tests::shared", "DEBUG");
        let second = setup_logger("global::tests::shared", "INFO");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.threshold(), Threshold::Debug);
        assert!(global().contains("global::tests::shared"));
    }

    #[test]
    fn test_setup_logger_coerces_unknown_level() {
        let logger = setup_logger("global::tests::bogus", "BOGUS");
        assert_eq!(logger.threshold(), Threshold::Info);
    }
}
