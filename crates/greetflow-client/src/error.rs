//! Error types for greeting service calls.

use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const GENERIC_FAILURE: &str = "Failed";

/// Errors that can occur while calling the greeting service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The service answered with a non-success status.
    ///
    /// `message` is the body's `detail` or a synthesized `HTTP {status}`.
    #[error("{message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Human-readable explanation.
        message: String,
    },

    /// The call could not complete: connection, DNS, TLS, an unusable URL,
    /// or a body that is not JSON.
    #[error("{0}")]
    Transport(String),

    /// A success status whose JSON does not match the expected schema.
    #[error("invalid response from greeting service: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Builds a service error for `status`, preferring the service's own detail.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Service { status, message }
    }

    /// Returns the message to display in the UI.
    ///
    /// Falls back to [`GENERIC_FAILURE`] when the underlying failure had no
    /// description.
    #[must_use]
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            text
        }
    }

    /// HTTP status of a service error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Transport(_) | Self::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for greeting service calls.
pub type Result<T> = std::result::Result<T, ClientError>;
