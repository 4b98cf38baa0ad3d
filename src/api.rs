//! Call boundary for presentation layers
//!
//! A UI (or CLI) hands this module three selectors and a raw value and gets
//! back either a numeric result with a display string, or the invalid-input
//! error. Parsing and formatting live here, not in the engine.

pub mod commands;
