//! Named-logger registry.
//!
//! # Data Flow
//! ```text
//! get_or_create_logger(name, threshold)
//!     → store.rs: name registered?   yes → return the stored Arc<Logger>
//!                                    no  → build Logger (formatter + one sink),
//!                                          insert, return it
//!
//! setup_logger(name, "DEBUG" | other)
//!     → global.rs: coerce level name, forward to the process-wide registry
//! ```
//!
//! # State Machine (per name)
//! ```text
//! Unregistered → Registered: first get_or_create_logger for that name
//! Registered is terminal: no removal, no threshold or sink change
//! ```
//!
//! # Design Decisions
//! - Lookup-or-insert is atomic per name, so a sink is never attached twice
//! - The registry is an owned value; the global one is a thin convenience

pub mod global;
pub mod store;

pub use global::{global, setup_logger};
pub use store::LoggerRegistry;
