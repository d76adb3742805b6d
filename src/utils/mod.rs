//! Shared utilities
//!
//! Error types and display formatting helpers.

pub mod error;
pub mod time;

pub use error::{ErrorResponse, WaveformError, WaveformResult};
pub use time::format_time;
