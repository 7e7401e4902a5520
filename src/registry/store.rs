//! Name-keyed logger store.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::config::RegistryConfig;
use crate::logging::{Logger, Sink, StderrSink, Threshold};

/// Memoizing map from logger name to logger.
///
/// The first request for a name builds the logger and attaches the
/// registry's sink to it. Later requests return that same instance and
/// ignore their threshold argument. Entries are never removed.
#[derive(Clone)]
pub struct LoggerRegistry {
    loggers: Arc<DashMap<String, Arc<Logger>>>,
    sink: Arc<dyn Sink>,
}

impl LoggerRegistry {
    /// Create an empty registry whose loggers write to standard error.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StderrSink))
    }

    /// Create an empty registry whose loggers all write to `sink`.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            loggers: Arc::new(DashMap::new()),
            sink,
        }
    }

    /// Create a stderr registry with the configured loggers pre-registered.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let registry = Self::new();
        registry.apply_config(config);
        registry
    }

    /// Register every configured logger, in declaration order.
    ///
    /// Names that are already registered keep their existing threshold.
    pub fn apply_config(&self, config: &RegistryConfig) {
        for entry in &config.loggers {
            self.get_or_create_logger(&entry.name, entry.threshold());
        }
    }

    /// Return the logger registered under `name`, creating it on first use.
    ///
    /// `threshold` only matters when this call creates the logger.
    pub fn get_or_create_logger(&self, name: &str, threshold: Threshold) -> Arc<Logger> {
        if let Some(existing) = self.loggers.get(name) {
            return Arc::clone(existing.value());
        }

        // The entry holds the shard lock, so racing first requests for the
        // same name construct exactly one logger.
        let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(logger = %name, %threshold, "Registered logger");
            Arc::new(Logger::new(name.to_string(), threshold, Arc::clone(&self.sink)))
        });
        Arc::clone(entry.value())
    }

    /// Shorthand for [`get_or_create_logger`](Self::get_or_create_logger) at INFO.
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        self.get_or_create_logger(name, Threshold::default())
    }

    /// Look up a logger without creating it.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.get(name).map(|r| Arc::clone(r.value()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .finish_non_exhaustive()
    }
}
