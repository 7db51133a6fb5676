//! Error types for the prediction boundary and configuration handling.
//!
//! The scoring engine itself is infallible for finite input. Errors come from
//! the edges: malformed requests, unreadable or inconsistent configuration,
//! and the final sanity check on computed results.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Wire message for rejected requests.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";
/// Wire message for failures inside the computation.
pub const PREDICTION_ERROR_MESSAGE: &str = "Prediction error occurred";

#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing, non-numeric or non-finite
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Request body is not a JSON object (or array of objects)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The request body itself could not be read
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// Every issue found while validating a configuration
    #[error("Configuration validation failed with {} issue(s): {}", .0.len(), .0.join("; "))]
    ConfigValidation(Vec<String>),

    /// The engine produced a result that is not well-formed
    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn configuration_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. }
                | Error::MalformedRequest(_)
                | Error::InputRead { .. }
                | Error::Json(_)
        )
    }
}

/// Body and status a request-handling layer returns for a failed prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: u16,
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        if err.is_client_error() {
            Self {
                status: 400,
                error: INVALID_INPUT_MESSAGE.to_string(),
            }
        } else {
            Self {
                status: 500,
                error: PREDICTION_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
