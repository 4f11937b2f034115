//! Format-args conveniences over the forensic logger.
//!
//! Both macros skip message formatting while logging is disabled. Without a
//! logger argument they target the process-wide logger; `logger => ...`
//! targets a specific [`ForensicLogger`](crate::ForensicLogger).

/// Log a formatted message with elapsed time measured from `start`.
///
/// ```
/// use forensic_core::{forensic_log, process_start};
///
/// let rows = 3;
/// forensic_log!(process_start(), "INFO", "loaded rows={}", rows);
/// ```
#[macro_export]
macro_rules! forensic_log {
    ($logger:expr => $start:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::ForensicLogger = $logger;
        if logger.is_enabled() {
            logger.log(&format!($($arg)+), $start, $level);
        }
    }};
    ($start:expr, $level:expr, $($arg:tt)+) => {
        $crate::forensic_log!($crate::global_logger() => $start, $level, $($arg)+)
    };
}

/// Check an assumption, formatting the warning only when it fails.
///
/// Evaluates to the condition.
///
/// ```
/// use forensic_core::forensic_check;
///
/// let items: Vec<u32> = Vec::new();
/// if !forensic_check!(!items.is_empty(), "no items found len={}", items.len()) {
///     // carry on regardless
/// }
/// ```
#[macro_export]
macro_rules! forensic_check {
    ($logger:expr => $cond:expr, $($arg:tt)+) => {{
        let logger: &$crate::ForensicLogger = $logger;
        let condition: bool = $cond;
        if !condition && logger.is_enabled() {
            logger.check(condition, &format!($($arg)+));
        }
        condition
    }};
    ($cond:expr, $($arg:tt)+) => {
        $crate::forensic_check!($crate::global_logger() => $cond, $($arg)+)
    };
}
