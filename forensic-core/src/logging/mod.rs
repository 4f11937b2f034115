//! Forensic logging.
//!
//! One compact JSON line per record, written to a single sink:
//! `{"ts":..,"elapsed_ms":..,"corr_id":..,"level":..,"msg":..}`

pub mod entry;
pub mod forensic;
pub mod global;
pub mod macros;
pub mod sink;

pub use entry::*;
pub use forensic::*;
pub use global::*;
pub use sink::*;
