//! Forensic Core - toggled, correlated JSON logging for forensics
//!
//! A debugging aid embedded in a host program. Every record is one compact
//! JSON line on stdout:
//!
//! ```text
//! {"ts":"2024-03-01T12:00:00.123456789Z","elapsed_ms":42,"corr_id":"…","level":"INFO","msg":"LoadData end"}
//! ```
//!
//! ## Operations
//!
//! - [`forensic_log`] - emit a record, elapsed time measured from a caller-supplied start
//! - [`forensic_check`] - log a `WARN` when an assumption does not hold
//! - [`forensic_scope`] - time a closure, end record guaranteed on panic
//! - [`start_scope`] - time a block with an explicit end token
//!
//! All of them are no-ops while the process-wide toggle is off, and none of
//! them ever surfaces an error to the caller.
//!
//! ## Architecture
//!
//! - `state` - enabled toggle, correlation id, process start
//! - `config` - initial toggle from `FORENSIC_ON`
//! - `logging` - entries, sinks, the logger and its macros
//! - `scope` - measured spans and their guards
//! - `error` - internal error type absorbed at the emit boundary
//!
//! ## Example
//!
//! ```
//! use forensic_core::{forensic_check, forensic_log, forensic_scope, process_start, start_scope};
//!
//! forensic_core::init();
//! forensic_log("Starting process", process_start(), "INFO");
//!
//! let items = vec![1, 2, 3];
//! forensic_check(!items.is_empty(), "No items found");
//!
//! let total: i32 = forensic_scope("LoadData", || items.iter().sum());
//! assert_eq!(total, 6);
//!
//! let _end = start_scope("ProcessData").guard();
//! // ... work, ended when `_end` drops
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};

pub mod config;
pub mod error;
pub mod logging;
pub mod scope;
pub mod state;

#[cfg(feature = "python")]
mod python;

pub use config::ForensicConfig;
pub use error::ForensicError;
pub use logging::{global_logger, CaptureBuffer, ForensicLogger, LogEntry, Sink, LEVEL_INFO, LEVEL_WARN};
pub use scope::{ScopeEnd, ScopeGuard};
pub use state::ForensicState;

/// Initialize the host-side `log` backend.
///
/// Only the forensic records go to stdout; this logger carries the crate's
/// own diagnostics. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}

/// Create the process-wide logger now, capturing the process start time.
pub fn init() {
    logging::init_global();
}

/// Emit a record against the process-wide logger.
pub fn forensic_log(message: &str, start: DateTime<Utc>, level: &str) {
    global_logger().log(message, start, level);
}

/// [`forensic_log`] at `INFO`.
pub fn forensic_info(message: &str, start: DateTime<Utc>) {
    global_logger().info(message, start);
}

/// Log a `WARN` when `condition` is false. Returns `condition`.
pub fn forensic_check(condition: bool, message: &str) -> bool {
    global_logger().check(condition, message)
}

/// Time `work` with start and end records.
pub fn forensic_scope<'a, R, F>(name: impl Into<Cow<'a, str>>, work: F) -> R
where
    F: FnOnce() -> R,
{
    global_logger().scope(name, work)
}

/// Emit the start record now; the returned token emits the end.
pub fn start_scope<'a>(name: impl Into<Cow<'a, str>>) -> ScopeEnd<'a> {
    global_logger().start_scope(name)
}

pub fn set_enabled(enabled: bool) {
    global_logger().set_enabled(enabled);
}

pub fn is_enabled() -> bool {
    global_logger().is_enabled()
}

pub fn correlation_id() -> &'static str {
    global_logger().correlation_id()
}

pub fn process_start() -> DateTime<Utc> {
    global_logger().process_start()
}
