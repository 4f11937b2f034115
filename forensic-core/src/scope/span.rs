//! Measured spans: start record now, end record later.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::logging::ForensicLogger;

/// End token returned by [`ForensicLogger::start_scope`].
///
/// Calling [`end`](ScopeEnd::end) emits `"<name> end"` with elapsed time
/// measured from the `start_scope` call. `end` consumes the token, so it can
/// run at most once. Dropping the token without calling `end` emits nothing;
/// use [`guard`](ScopeEnd::guard) to end on drop instead.
#[must_use = "the scope's end record is only written by `end()` or a guard"]
#[derive(Debug)]
pub struct ScopeEnd<'a> {
    logger: &'a ForensicLogger,
    name: Cow<'a, str>,
    started_at: DateTime<Utc>,
}

impl<'a> ScopeEnd<'a> {
    fn begin(logger: &'a ForensicLogger, name: Cow<'a, str>) -> Self {
        let started_at = Utc::now();
        logger.scope_marker(&name, "start", started_at);
        Self {
            logger,
            name,
            started_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn end(self) {
        self.logger.scope_marker(&self.name, "end", self.started_at);
    }

    /// Hand the token to a guard that ends the span when dropped.
    pub fn guard(self) -> ScopeGuard<'a> {
        ScopeGuard { end: Some(self) }
    }
}

/// Ends its span on drop, including during unwinding.
#[must_use = "dropping the guard immediately ends the scope"]
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    end: Option<ScopeEnd<'a>>,
}

impl ScopeGuard<'_> {
    /// End the span now instead of at drop.
    pub fn end(mut self) {
        if let Some(end) = self.end.take() {
            end.end();
        }
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(end) = self.end.take() {
            end.end();
        }
    }
}

impl ForensicLogger {
    /// Emit `"<name> start"` now and return the token that emits the end.
    pub fn start_scope<'a>(&'a self, name: impl Into<Cow<'a, str>>) -> ScopeEnd<'a> {
        ScopeEnd::begin(self, name.into())
    }

    /// Run `work` between a start and an end record.
    ///
    /// The return value of `work` is passed through untouched, errors
    /// included. A panic in `work` still produces the end record and then
    /// continues unwinding into the caller.
    pub fn scope<'a, R, F>(&'a self, name: impl Into<Cow<'a, str>>, work: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.start_scope(name).guard();
        work()
    }
}
