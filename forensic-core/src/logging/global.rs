//! The process-wide logger.

use lazy_static::lazy_static;

use super::forensic::ForensicLogger;

// Initialized on first use; call `crate::init()` early to pin the start time.
lazy_static! {
    static ref FORENSIC_LOGGER: ForensicLogger = ForensicLogger::from_env();
}

/// The logger behind the crate-level free functions and macros.
pub fn global_logger() -> &'static ForensicLogger {
    &FORENSIC_LOGGER
}

/// Force creation of the process-wide logger.
pub fn init_global() {
    lazy_static::initialize(&FORENSIC_LOGGER);
}
