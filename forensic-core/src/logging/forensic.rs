//! The forensic logger: toggle, log emission and assumption checks.

use chrono::{DateTime, Utc};

use crate::config::ForensicConfig;
use crate::error::ForensicError;
use crate::state::ForensicState;

use super::entry::{LogEntry, LEVEL_INFO, LEVEL_WARN};
use super::sink::Sink;

/// Toggle-driven JSON logger bound to one run's correlation id.
///
/// Every operation is synchronous and runs on the caller's thread. No
/// operation returns an error or panics because of a failed write: the
/// record is dropped and the failure is reported through the `log` facade.
#[derive(Debug)]
pub struct ForensicLogger {
    state: ForensicState,
    sink: Sink,
}

impl ForensicLogger {
    pub fn new(config: &ForensicConfig, sink: Sink) -> Self {
        Self::with_state(ForensicState::new(config), sink)
    }

    pub fn with_state(state: ForensicState, sink: Sink) -> Self {
        Self { state, sink }
    }

    /// Logger writing to stdout, configured from the environment.
    pub fn from_env() -> Self {
        Self::new(&ForensicConfig::from_env(), Sink::stdout())
    }

    pub fn state(&self) -> &ForensicState {
        &self.state
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Switch logging on or off for all subsequent calls.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.state.set_enabled(enabled);
        if previous != enabled {
            log::info!(
                "FORENSIC_TOGGLED enabled={} corr_id={}",
                enabled,
                self.state.correlation_id()
            );
        }
    }

    pub fn correlation_id(&self) -> &str {
        self.state.correlation_id()
    }

    pub fn process_start(&self) -> DateTime<Utc> {
        self.state.process_start()
    }

    /// Emit one record with elapsed time measured from `start`.
    ///
    /// No-op while disabled.
    pub fn log(&self, message: &str, start: DateTime<Utc>, level: &str) {
        if !self.state.is_enabled() {
            return;
        }

        if let Err(e) = self.emit(message, start, level) {
            log::debug!(
                "FORENSIC_EMIT_DROPPED corr_id={} level={} reason={}",
                self.state.correlation_id(),
                level,
                e
            );
        }
    }

    pub fn info(&self, message: &str, start: DateTime<Utc>) {
        self.log(message, start, LEVEL_INFO);
    }

    pub fn warn(&self, message: &str, start: DateTime<Utc>) {
        self.log(message, start, LEVEL_WARN);
    }

    /// Record a violated assumption.
    ///
    /// Emits a `WARN` record measured from process start when `condition`
    /// is false and logging is enabled. Control flow is never altered; the
    /// condition is handed back for inline use.
    pub fn check(&self, condition: bool, message: &str) -> bool {
        if !condition && self.state.is_enabled() {
            self.log(message, self.state.process_start(), LEVEL_WARN);
        }
        condition
    }

    /// `"<name> <phase>"` at INFO, formatted only when enabled.
    pub(crate) fn scope_marker(&self, name: &str, phase: &str, started_at: DateTime<Utc>) {
        if self.state.is_enabled() {
            self.log(&format!("{} {}", name, phase), started_at, LEVEL_INFO);
        }
    }

    fn emit(&self, message: &str, start: DateTime<Utc>, level: &str) -> Result<(), ForensicError> {
        let entry = LogEntry::new(
            Utc::now(),
            start,
            self.state.correlation_id(),
            level,
            message,
        );
        let line = entry.to_json_line()?;
        self.sink.write_line(&line)
    }
}
