//! Error types and handling
//!
//! Common error types used across the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("Channel {channel} does not exist in audio signal ({available} available)")]
    OutOfRange { channel: usize, available: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error response for frontend
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<WaveformError> for ErrorResponse {
    fn from(error: WaveformError) -> Self {
        let code = match &error {
            WaveformError::OutOfRange { .. } => "OUT_OF_RANGE",
            WaveformError::InvalidArgument(_) => "INVALID_ARGUMENT",
            WaveformError::Decode(_) => "DECODE_ERROR",
            WaveformError::Io(_) => "IO_ERROR",
            WaveformError::Serialization(_) => "SERIALIZATION_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<WaveformError> for String {
    fn from(e: WaveformError) -> String {
        e.to_string()
    }
}

/// Result type alias using WaveformError
pub type WaveformResult<T> = Result<T, WaveformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = WaveformError::OutOfRange {
            channel: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Channel 2 does not exist in audio signal (1 available)"
        );
    }

    #[test]
    fn test_error_response_codes() {
        let response: ErrorResponse = WaveformError::Decode("bad header".to_string()).into();
        assert_eq!(response.code, "DECODE_ERROR");
        assert_eq!(response.message, "Decoding error: bad header");

        let response: ErrorResponse =
            WaveformError::InvalidArgument("bucket count".to_string()).into();
        assert_eq!(response.code, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_serialization_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: WaveformError = json_err.into();
        let response = ErrorResponse::from(err);
        assert_eq!(response.code, "SERIALIZATION_ERROR");
    }
}
