//! Error types for the MCP server.

use thiserror::Error;

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;

/// Error type for MCP server operations.
///
/// Tool failures never show up here; they are reported to the host as a
/// [`ToolOutcome::Failure`](crate::tools::ToolOutcome).
#[derive(Debug, Error)]
pub enum McpError {
    /// Malformed framing or message.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The host asked for a tool that is not registered.
    #[error("unknown tool: '{0}'")]
    UnknownTool(String),
}

impl McpError {
    /// Create a protocol error.
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McpError::protocol("invalid Content-Length");
        assert!(err.to_string().contains("protocol"));
        assert!(err.to_string().contains("Content-Length"));

        let err = McpError::UnknownTool("frobnicate".to_string());
        assert_eq!(err.to_string(), "unknown tool: 'frobnicate'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: McpError = io_err.into();
        assert!(matches!(err, McpError::Io(_)));
    }
}
