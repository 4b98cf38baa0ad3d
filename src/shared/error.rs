//! Strict error handling for the conversion boundary
//!
//! The converter has exactly one failure mode: the caller gave it something
//! it cannot turn into a number (unparseable text, NaN/infinity, or a unit
//! selector outside the category's declared list). Everything is surfaced as
//! `ConvertError::InvalidInput`; the engine never panics past its boundary.

use serde::Serialize;
use thiserror::Error;

/// Conversion errors
///
/// Serializable so a frontend can receive the discriminated result directly.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConvertError {
    /// Unparseable, non-finite, or out-of-range input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Helper type alias for conversion results
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Fixed user-facing message shown in place of a numeric result
pub const MSG_INPUT_NOT_VALID: &str = "Input not valid";
