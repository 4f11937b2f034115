//! Process-wide forensic state.
//!
//! Holds the enabled toggle, the correlation id and the process start time.

pub mod process;

pub use process::*;
