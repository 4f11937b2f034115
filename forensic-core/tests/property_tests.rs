//! Property checks over arbitrary messages, levels and start offsets.

use chrono::{Duration, Utc};
use forensic_core::{ForensicConfig, ForensicLogger, Sink};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_any_message_is_one_line(msg in ".*", level in "[A-Z]{1,8}") {
        let (sink, buffer) = Sink::capture();
        let logger = ForensicLogger::new(&ForensicConfig::default(), sink);

        logger.log(&msg, Utc::now(), &level);

        let contents = buffer.contents();
        prop_assert_eq!(contents.matches('\n').count(), 1);
        prop_assert!(contents.ends_with('\n'));

        let records = buffer.records().unwrap();
        prop_assert_eq!(records[0]["msg"].as_str().unwrap(), msg.as_str());
        prop_assert_eq!(records[0]["level"].as_str().unwrap(), level.as_str());
    }

    #[test]
    fn prop_elapsed_tracks_start_offset(offset_ms in 0i64..10_000_000) {
        let (sink, buffer) = Sink::capture();
        let logger = ForensicLogger::new(&ForensicConfig::default(), sink);

        logger.info("offset", Utc::now() - Duration::milliseconds(offset_ms));

        let elapsed = buffer.records().unwrap()[0]["elapsed_ms"].as_i64().unwrap();
        prop_assert!(elapsed >= offset_ms);
        prop_assert!(elapsed < offset_ms + 1_000);
    }

    #[test]
    fn prop_passing_check_is_silent(msg in ".*") {
        let (sink, buffer) = Sink::capture();
        let logger = ForensicLogger::new(&ForensicConfig::default(), sink);

        prop_assert!(logger.check(true, &msg));
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn prop_disabled_logger_is_silent(msg in ".*", fail in any::<bool>()) {
        let (sink, buffer) = Sink::capture();
        let logger = ForensicLogger::new(&ForensicConfig::new(false), sink);

        logger.warn(&msg, Utc::now());
        logger.check(!fail, &msg);
        logger.scope(msg.as_str(), || ());

        prop_assert_eq!(buffer.byte_len(), 0);
    }
}
