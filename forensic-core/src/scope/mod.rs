//! Scoped timing.
//!
//! One measured-span primitive, [`ScopeEnd`], backs both call styles:
//! - acquire/release: `let end = logger.start_scope("Load"); ...; end.end();`
//! - callback: `logger.scope("Load", || load())`, which ends the span through
//!   a [`ScopeGuard`] so the end record survives a panic in the work.

pub mod span;

pub use span::*;
