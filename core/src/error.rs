//! Error types for scheme operations

use thiserror::Error;

/// Errors that can occur while talking to the scheme service or editing a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// The request never produced a response (DNS, connection reset, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The session is missing or expired
    #[error("Not authorized (status {status})")]
    Unauthorized { status: u16 },

    /// Any other non-success status from a reachable endpoint
    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response whose body could not be parsed
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A local precondition failed before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SchemeError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized { status },
            _ => Self::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether the caller should send the user back to the login screen
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether the server was reached and answered with a failure status
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Status { .. })
    }
}

pub type SchemeResult<T> = Result<T, SchemeError>;
