//! Runtime configuration.
//!
//! The only configurable value is the initial state of the process-wide
//! toggle, read from the environment. There is no configuration file.

pub mod toggle;

pub use toggle::*;
