//! Shared helpers for integration tests.

use std::sync::Arc;

use log_registry::logging::MemorySink;
use log_registry::LoggerRegistry;

/// Pattern every emitted line must match, with the level and message appended.
pub const LINE_PREFIX: &str = r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} - ";

/// A registry whose loggers write into an inspectable in-memory sink.
#[allow(dead_code)]
pub fn memory_registry() -> (LoggerRegistry, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (LoggerRegistry::with_sink(sink.clone()), sink)
}

/// Build a regex for a full line at `level` carrying `message`.
#[allow(dead_code)]
pub fn line_regex(level: &str, message: &str) -> regex::Regex {
    regex::Regex::new(&format!("{}{} : {}$", LINE_PREFIX, level, regex::escape(message)))
        .expect("valid line regex")
}
