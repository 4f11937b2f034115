//! The process-wide logger behind the crate-level functions.
//!
//! Output goes to stdout, so these tests only assert on state and return
//! values. Kept in one test so toggling cannot race another test.

use chrono::Utc;
use forensic_core::{
    correlation_id, forensic_check, forensic_info, forensic_log, forensic_scope, global_logger,
    is_enabled, process_start, set_enabled, start_scope,
};

#[test]
fn test_global_logger_surface() {
    forensic_core::init();

    let corr = correlation_id();
    assert_eq!(corr.len(), 36);
    assert_eq!(corr, global_logger().correlation_id());
    assert!(process_start() <= Utc::now());

    let initial = is_enabled();

    set_enabled(false);
    assert!(!is_enabled());
    forensic_log("suppressed", process_start(), "INFO");
    assert!(!forensic_check(false, "suppressed"));

    set_enabled(true);
    assert!(is_enabled());
    forensic_info("visible", process_start());
    assert!(forensic_check(true, "holds"));

    let value = forensic_scope("GlobalScope", || 41 + 1);
    assert_eq!(value, 42);

    let name = format!("Dynamic-{}", 7);
    start_scope(name.as_str()).end();
    start_scope(name).end();

    forensic_core::forensic_log!(process_start(), "INFO", "formatted {}", 1);
    assert!(!forensic_core::forensic_check!(1 > 2, "ordering {}", "broken"));

    // Identity is fixed for the run.
    assert_eq!(correlation_id(), corr);

    forensic_core::init_logger();
    forensic_core::init_logger();

    set_enabled(initial);
}
