//! Unit converter core
//!
//! Pure conversion logic for three unit categories (length, weight,
//! temperature) plus the thin call boundary a presentation layer talks to.
//! The engine itself does no I/O and keeps no state; callers hand it three
//! selectors and a value and get back a number or an invalid-input error.

pub mod api;
pub mod core;
pub mod shared;

// Re-export the main entry points for convenience
pub use crate::api::commands::{convert_units, get_all_units, get_units_for_category};
pub use crate::core::converter::convert;
pub use crate::core::units::{Category, TemperatureUnit};
pub use crate::shared::error::{ConvertError, ConvertResult};
