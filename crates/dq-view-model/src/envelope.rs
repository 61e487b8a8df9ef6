//! API Envelope
//!
//! Every endpoint answers `{ "success": bool, "data": ..., "error": "..." }`.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API or geometry request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status with a body that was not an envelope
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },
    /// Body was not the JSON shape we expected
    #[error("could not decode response: {0}")]
    Decode(String),
    /// Backend answered `success: false`
    #[error("{0}")]
    Backend(String),
    /// Backend answered `success: true` without a payload
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    /// Message shown to the user when a save fails
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(msg) => format!("Error: {}", msg),
            _ => "Failed to save task".to_string(),
        }
    }
}

/// Wire envelope wrapping every API payload
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            let msg = self.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(ApiError::Backend(msg));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// For writes whose payload is not needed: only `success` matters
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Backend(self.error.unwrap_or_else(|| "unknown error".to_string())))
        }
    }
}
