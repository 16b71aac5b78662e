//! Structured logging.
//!
//! One JSON line per event, explicit severity, deterministic key ordering,
//! synchronous writes. Logging failure must never affect request handling.

mod logger;

pub use logger::{Logger, Severity};
