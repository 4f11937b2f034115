//! State holder shared by every record a logger emits.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::ForensicConfig;

/// Enabled toggle plus the write-once identity of a run.
///
/// `correlation_id` and `process_start` never change after construction, so
/// they are read without synchronization. The toggle is atomic and may be
/// flipped from any thread while records are being emitted.
#[derive(Debug)]
pub struct ForensicState {
    enabled: AtomicBool,
    correlation_id: String,
    process_start: DateTime<Utc>,
}

impl ForensicState {
    /// Fresh state: random v4 correlation id, start time captured now.
    pub fn new(config: &ForensicConfig) -> Self {
        Self::with_identity(config.enabled, Uuid::new_v4().to_string(), Utc::now())
    }

    /// State with a caller-chosen identity.
    pub fn with_identity(
        enabled: bool,
        correlation_id: impl Into<String>,
        process_start: DateTime<Utc>,
    ) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            correlation_id: correlation_id.into(),
            process_start,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        // The flag guards no other memory, relaxed ordering is enough.
        self.enabled.load(Ordering::Relaxed)
    }

    /// Flip the toggle, returning the previous value.
    pub fn set_enabled(&self, enabled: bool) -> bool {
        self.enabled.swap(enabled, Ordering::Relaxed)
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn process_start(&self) -> DateTime<Utc> {
        self.process_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_v4_correlation_id() {
        let state = ForensicState::new(&ForensicConfig::default());
        let parsed = Uuid::parse_str(state.correlation_id()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert!(state.is_enabled());
    }

    #[test]
    fn test_correlation_ids_differ_between_states() {
        let a = ForensicState::new(&ForensicConfig::default());
        let b = ForensicState::new(&ForensicConfig::default());
        assert_ne!(a.correlation_id(), b.correlation_id());
    }

    #[test]
    fn test_set_enabled_returns_previous() {
        let state = ForensicState::new(&ForensicConfig::new(false));
        assert!(!state.is_enabled());
        assert!(!state.set_enabled(true));
        assert!(state.is_enabled());
        assert!(state.set_enabled(false));
        assert!(!state.is_enabled());
    }

    #[test]
    fn test_identity_is_fixed() {
        let start = Utc::now();
        let state = ForensicState::with_identity(true, "run-1", start);
        state.set_enabled(false);
        assert_eq!(state.correlation_id(), "run-1");
        assert_eq!(state.process_start(), start);
    }
}
