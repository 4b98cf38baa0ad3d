pub mod error;
pub mod types;

// Re-export the error type for convenience
pub use error::{ConvertError, ConvertResult};
