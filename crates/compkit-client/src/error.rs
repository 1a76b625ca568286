//! Client error types.

use thiserror::Error;

/// Boxed source for transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification of a client error.
///
/// Callers that turn errors into user-facing remediation only need to know
/// which side of the exchange failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response (network or HTTP status).
    Transport,
    /// A response arrived but its body was not the expected JSON.
    Decode,
    /// The client itself is misconfigured.
    Config,
}

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP-level failure.
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// Server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server, or a generic one.
        message: String,
    },

    /// Response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error from any error or message.
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) | Error::Api { .. } => ErrorKind::Transport,
            Error::Decode(_) => ErrorKind::Decode,
            Error::InvalidUrl(_) | Error::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body some API deployments return alongside a failure status.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}
