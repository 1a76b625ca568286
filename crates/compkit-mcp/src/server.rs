//! MCP server loop over stdio (or any async byte stream).
//!
//! Every request is handled on its own task so that slow tool calls do not
//! block `ping` or `tools/list`. Responses funnel through a single writer
//! task, which keeps frames from interleaving on the output stream.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::{McpError, Result};
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, MCP_PROTOCOL_VERSION, RequestId,
    ServerCapabilities, ServerInfo, ToolContent, ToolsCapability,
};
use crate::tools::ToolRegistry;
use crate::transport::{FrameReader, Framing, write_frame};

/// MCP server exposing a [`ToolRegistry`].
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    /// Create a server for the given tools.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            info: ServerInfo::default(),
        }
    }

    /// Override the name/version reported in `initialize`.
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// The tools this server exposes.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn serve_stdio(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve until `reader` reaches EOF, then wait for in-flight requests.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        tracing::info!(
            server = %self.info.name,
            version = %self.info.version,
            tools = self.registry.len(),
            "MCP server started"
        );

        let (tx, rx) = mpsc::unbounded_channel::<(Framing, String)>();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        let mut frames = FrameReader::new(reader);
        let mut in_flight = JoinSet::new();
        let mut read_error = None;

        loop {
            let frame = match frames.next_frame().await {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(McpError::Protocol(msg)) => {
                    tracing::warn!(error = %msg, "dropping malformed frame");
                    let response = JsonRpcResponse::failure(
                        None,
                        JsonRpcError::new(JsonRpcError::PARSE_ERROR, msg),
                    );
                    if let Ok(body) = serde_json::to_string(&response) {
                        let _ = tx.send((frames.last_framing(), body));
                    }
                    continue;
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read from input");
                    read_error = Some(e);
                    break;
                }
            };

            let server = self.clone();
            let tx = tx.clone();
            in_flight.spawn(async move {
                let Some(response) = server.handle_message(&frame.body).await else {
                    return;
                };
                match serde_json::to_string(&response) {
                    Ok(body) => {
                        let _ = tx.send((frame.framing, body));
                    }
                    Err(e) => tracing::error!(error = %e, "failed to serialize response"),
                }
            });

            while let Some(joined) = in_flight.try_join_next() {
                if let Err(e) = joined {
                    tracing::error!(error = %e, "request task panicked");
                }
            }
        }

        tracing::debug!(pending = in_flight.len(), "input closed, draining requests");
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "request task panicked");
            }
        }
        drop(tx);

        match writer_task.await {
            Ok(result) => result?,
            Err(e) => return Err(McpError::protocol(format!("writer task failed: {}", e))),
        }

        tracing::info!("MCP server stopped");
        match read_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Handle one message body. Returns `None` for notifications.
    pub async fn handle_message(&self, body: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "received unparseable JSON");
                return Some(JsonRpcResponse::failure(
                    None,
                    JsonRpcError::new(JsonRpcError::PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(r) => r,
            Err(e) => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
                return Some(JsonRpcResponse::failure(
                    id,
                    JsonRpcError::new(
                        JsonRpcError::INVALID_REQUEST,
                        format!("Invalid request: {}", e),
                    ),
                ));
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "received notification");
            return None;
        }

        let id = request.id.clone();
        let response = match self.dispatch(request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        };
        Some(response)
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> std::result::Result<Value, JsonRpcError> {
        tracing::debug!(id = ?request.id, method = %request.method, "handling request");

        match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.registry.definitions(),
            }),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        }
    }

    fn initialize(&self, params: Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(p) => serde_json::from_value(p).map_err(invalid_params)?,
            None => InitializeParams::default(),
        };

        let client = params.client_info.as_ref().map(|c| c.name.as_str());
        tracing::info!(client = ?client, protocol = ?params.protocol_version, "client initialized");

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| MCP_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| {
                JsonRpcError::new(JsonRpcError::INVALID_PARAMS, "Missing tools/call params")
            })
            .and_then(|p| serde_json::from_value(p).map_err(invalid_params))?;

        let args = params.arguments.unwrap_or(Value::Null);
        let outcome = match self.registry.call(&params.name, args).await {
            Ok(outcome) => outcome,
            Err(McpError::UnknownTool(name)) => {
                tracing::warn!(tool = %name, "call to unknown tool");
                return Err(JsonRpcError::new(
                    JsonRpcError::INVALID_PARAMS,
                    format!("Unknown tool: {}", name),
                ));
            }
            Err(e) => {
                return Err(JsonRpcError::new(
                    JsonRpcError::INTERNAL_ERROR,
                    e.to_string(),
                ));
            }
        };

        to_result(&CallToolResult {
            content: vec![ToolContent::Text {
                text: outcome.to_text(),
            }],
            is_error: outcome.is_failure(),
        })
    }
}

async fn write_responses<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<(Framing, String)>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some((framing, body)) = rx.recv().await {
        if let Err(e) = write_frame(&mut writer, framing, &body).await {
            tracing::error!(error = %e, "failed to write response");
            return Err(e);
        }
    }
    Ok(())
}

fn to_result<T: Serialize>(result: &T) -> std::result::Result<Value, JsonRpcError> {
    serde_json::to_value(result)
        .map_err(|e| JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, e.to_string()))
}

fn invalid_params(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError::new(
        JsonRpcError::INVALID_PARAMS,
        format!("Invalid params: {}", e),
    )
}
