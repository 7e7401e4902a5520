//! Record severities and logger thresholds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity carried by a single log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Upper-case name as it appears in emitted lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected debug, info, warning, error or critical)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Minimum severity a logger lets through.
///
/// Only two thresholds exist. Loggers are created with one of them and keep
/// it for their whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Threshold {
    Debug,
    #[default]
    Info,
}

impl Threshold {
    /// Coerce a configured level name into a threshold.
    ///
    /// Exactly `"DEBUG"` selects [`Threshold::Debug`]. Every other string,
    /// including lower-case `"debug"`, falls back to [`Threshold::Info`].
    pub fn from_level_name(name: &str) -> Self {
        if name == "DEBUG" {
            Threshold::Debug
        } else {
            Threshold::Info
        }
    }

    /// Lowest severity emitted under this threshold.
    pub fn min_severity(&self) -> Severity {
        match self {
            Threshold::Debug => Severity::Debug,
            Threshold::Info => Severity::Info,
        }
    }

    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.min_severity()
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.min_severity().as_str())
    }
}
