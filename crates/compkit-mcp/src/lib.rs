//! MCP tool server for the compkit component API.
//!
//! ```text
//! host ──stdio──▶ McpServer ──▶ ToolRegistry ──▶ Tool ──▶ ComponentApi ──HTTP──▶ remote API
//! ```
//!
//! The server speaks JSON-RPC 2.0 with either line-delimited or
//! `Content-Length` framing and exposes five tools:
//! `search_components`, `get_component_docs`, `recommend_components`,
//! `generate_code` and `get_help`.
//!
//! Tool failures are never JSON-RPC errors. They come back as a normal
//! `tools/call` result with `isError: true` and a body of
//! `{"success": false, "error": ..., "suggestions": [...]}`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use compkit_client::ComponentClient;
//! use compkit_mcp::{McpServer, ToolRegistry};
//!
//! let client = ComponentClient::builder()
//!     .base_url("http://localhost:3000/api/mcp")
//!     .build()?;
//! let server = McpServer::new(ToolRegistry::with_component_tools(Arc::new(client)));
//! server.serve_stdio().await?;
//! ```

pub mod error;
pub mod health;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use error::{McpError, Result};
pub use health::{HealthCheck, liveness};
pub use protocol::{
    CallToolResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION,
    RequestId, ServerInfo, ToolContent, ToolInfo,
};
pub use server::McpServer;
pub use tools::{COMPONENT_TOOLS, Tool, ToolFailure, ToolOutcome, ToolRegistry};
pub use transport::{Frame, FrameReader, Framing, write_frame};
