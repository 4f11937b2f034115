//! Log entry value object and its JSON line encoding.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ForensicError;

pub const LEVEL_INFO: &str = "INFO";
pub const LEVEL_WARN: &str = "WARN";

/// One forensic record.
///
/// Field order is the JSON key order: `ts, elapsed_ms, corr_id, level, msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry<'a> {
    pub ts: String,
    pub elapsed_ms: i64,
    pub corr_id: &'a str,
    pub level: &'a str,
    pub msg: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(
        now: DateTime<Utc>,
        start: DateTime<Utc>,
        corr_id: &'a str,
        level: &'a str,
        msg: &'a str,
    ) -> Self {
        Self {
            ts: now.to_rfc3339_opts(SecondsFormat::Nanos, true),
            elapsed_ms: elapsed_ms(now, start),
            corr_id,
            level,
            msg,
        }
    }

    /// Compact JSON followed by a single `\n`, ready for one write call.
    pub fn to_json_line(&self) -> Result<Vec<u8>, ForensicError> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

/// Whole milliseconds from `start` to `now`, truncated toward zero.
///
/// Negative only when `start` lies after `now`.
pub fn elapsed_ms(now: DateTime<Utc>, start: DateTime<Utc>) -> i64 {
    now.signed_duration_since(start).num_milliseconds()
}
