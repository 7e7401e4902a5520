//! Named loggers and their building blocks.
//!
//! # Data Flow
//! ```text
//! logger.info("message")
//!     → level.rs (threshold check, drop if below)
//!     → format.rs ("<timestamp> - <LEVEL> : <message>")
//!     → sink.rs (one line to stderr)
//! ```
//!
//! # Design Decisions
//! - Thresholds are a closed two-value enum; string coercion lives at the edges
//! - A logger owns exactly one sink, fixed at construction
//! - Emitting never fails the caller

pub mod format;
pub mod level;
pub mod logger;
pub mod sink;

pub use format::LineFormatter;
pub use level::{ParseSeverityError, Severity, Threshold};
pub use logger::Logger;
pub use sink::{MemorySink, Sink, StderrSink};
