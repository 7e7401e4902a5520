//! Named logger.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::logging::format::LineFormatter;
use crate::logging::level::{Severity, Threshold};
use crate::logging::sink::Sink;

/// A named logger with a fixed threshold, formatter and sink.
///
/// Loggers are built by [`crate::registry::LoggerRegistry`] and handed out as
/// `Arc<Logger>`. None of their configuration changes after construction.
pub struct Logger {
    name: String,
    threshold: Threshold,
    formatter: LineFormatter,
    sink: Arc<dyn Sink>,
    /// Set after the first failed sink write so the failure is reported once.
    sink_failed: AtomicBool,
}

impl Logger {
    pub(crate) fn new(name: String, threshold: Threshold, sink: Arc<dyn Sink>) -> Self {
        Self {
            name,
            threshold,
            formatter: LineFormatter::new(),
            sink,
            sink_failed: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Whether a record at `severity` would be emitted.
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.threshold.allows(severity)
    }

    /// Emit `message` at `severity` if the threshold allows it.
    ///
    /// Never fails. A sink error drops the record.
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        if !self.is_enabled_for(severity) {
            return;
        }

        let line = self.formatter.format(severity, message.as_ref());
        if let Err(e) = self.sink.write_line(&line) {
            if !self.sink_failed.swap(true, Ordering::Relaxed) {
                tracing::warn!(logger = %self.name, error = %e, "Log sink write failed, dropping records");
            }
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Severity::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
