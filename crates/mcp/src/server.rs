// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::prompts::PromptCatalog;
use crate::protocol::*;
use crate::resources::ResourceCatalog;
use crate::tools::{RegistryError, ToolRegistry};
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};

const INSTRUCTIONS: &str = "Tools for a Dokploy instance. Identifiers returned by list and \
get tools are passed back verbatim. Read dokploy://docs/overview for the resource hierarchy \
and the error kinds.";

/// Longest request line accepted from the client.
const MAX_LINE_BYTES: usize = 8 * 1024 * 1024;

type InFlight = Arc<Mutex<HashMap<String, AbortHandle>>>;

/// One unit read from the client.
#[derive(Debug, PartialEq, Eq)]
enum Incoming {
    Line(String),
    /// A line that could not be taken as text; already consumed.
    Malformed(&'static str),
}

/// Newline framing that reports undecodable or oversized lines as frames
/// instead of stream errors, so the session outlives them.
struct RequestLines {
    inner: LinesCodec,
}

impl RequestLines {
    fn new(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn lift(result: Result<Option<String>, LinesCodecError>) -> std::io::Result<Option<Incoming>> {
        match result {
            Ok(line) => Ok(line.map(Incoming::Line)),
            Err(LinesCodecError::MaxLineLengthExceeded) => {
                Ok(Some(Incoming::Malformed("line exceeds maximum length")))
            }
            Err(LinesCodecError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                Ok(Some(Incoming::Malformed("line is not valid UTF-8")))
            }
            Err(LinesCodecError::Io(e)) => Err(e),
        }
    }
}

impl Decoder for RequestLines {
    type Item = Incoming;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Incoming>> {
        Self::lift(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Incoming>> {
        Self::lift(self.inner.decode_eof(buf))
    }
}

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    resources: ResourceCatalog,
    prompts: PromptCatalog,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            resources: ResourceCatalog::default(),
            prompts: PromptCatalog::default(),
            info: ServerInfo {
                name: "dokploy-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(self) -> Result<()> {
        tracing::info!("MCP server listening on stdio");
        Arc::new(self)
            .serve(tokio::io::stdin(), tokio::io::stdout())
            .await
    }

    /// Read requests line by line from `reader` and write responses to
    /// `writer`. Tool calls run concurrently; their responses are written in
    /// completion order.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, RequestLines::new(MAX_LINE_BYTES));
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = rx.recv().await {
                let line = serde_json::to_string(&response).context("Failed to encode response")?;
                sink.send(line).await.context("Failed to write response")?;
            }
            Ok::<_, anyhow::Error>(())
        });

        let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

        while let Some(line) = lines.next().await {
            let line = match line.context("Failed to read from client")? {
                Incoming::Line(line) => line,
                Incoming::Malformed(reason) => {
                    tracing::warn!(reason, "Unreadable message");
                    let _ = tx.send(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let request = match parse_line(&line) {
                Ok(request) => request,
                Err(response) => {
                    let _ = tx.send(response);
                    continue;
                }
            };

            match (request.method.as_str(), request.id.clone()) {
                ("tools/call", Some(id)) => {
                    self.spawn_tool_call(id, request.params, &tx, &in_flight).await;
                }
                ("notifications/cancelled", None) => {
                    cancel(request.params, &in_flight).await;
                }
                _ => {
                    if let Some(response) = self.handle_request(request).await {
                        let _ = tx.send(response);
                    }
                }
            }
        }

        tracing::info!("Client closed the connection");
        for (_, handle) in in_flight.lock().await.drain() {
            handle.abort();
        }
        drop(tx);

        writer_task.await.context("Writer task panicked")?
    }

    async fn spawn_tool_call(
        self: &Arc<Self>,
        id: Value,
        params: Option<Value>,
        tx: &mpsc::UnboundedSender<JsonRpcResponse>,
        in_flight: &InFlight,
    ) {
        let key = id.to_string();
        let server = Arc::clone(self);
        let tx = tx.clone();
        let table = Arc::clone(in_flight);

        let mut in_flight = in_flight.lock().await;
        if in_flight.contains_key(&key) {
            tracing::warn!(request_id = %key, "Request id reused while still running");
            let error = JsonRpcError {
                message: format!("Request id {} is already in flight", key),
                ..JsonRpcError::invalid_request()
            };
            let _ = tx.send(JsonRpcResponse::error(id, error));
            return;
        }
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            let response = server.handle_tool_call(id, params).await;
            table.lock().await.remove(&task_key);
            let _ = tx.send(response);
        });
        in_flight.insert(key, handle.abort_handle());
    }

    /// Answer a single request. Notifications yield `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        tracing::debug!(method = %request.method, "Handling request");
        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, Value::Object(Default::default())),
            "tools/list" => respond(
                id,
                &ListToolsResult {
                    tools: self.registry.list_descriptors(),
                },
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            "resources/list" => respond(
                id,
                &ListResourcesResult {
                    resources: self.resources.list(),
                },
            ),
            "resources/read" => self.handle_read_resource(id, request.params),
            "resources/templates/list" => {
                JsonRpcResponse::success(id, serde_json::json!({ "resourceTemplates": [] }))
            }
            "prompts/list" => respond(
                id,
                &ListPromptsResult {
                    prompts: self.prompts.list(),
                },
            ),
            "prompts/get" => self.handle_get_prompt(id, request.params),
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => tracing::info!("Client initialized"),
            "notifications/cancelled" => {
                tracing::debug!("Cancellation for a request that is not running")
            }
            other => tracing::debug!(method = other, "Ignoring notification"),
        }
    }

    fn handle_initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = match parse_params(params) {
            Ok(params) => params,
            Err(error) => return JsonRpcResponse::error(id, error),
        };

        let protocol_version = if SUPPORTED_PROTOCOL_VERSIONS.contains(&params.protocol_version.as_str()) {
            params.protocol_version
        } else {
            LATEST_PROTOCOL_VERSION.to_string()
        };
        tracing::info!(
            client = %params.client_info.name,
            client_version = %params.client_info.version,
            protocol = %protocol_version,
            "Initializing session"
        );

        respond(
            id,
            &InitializeResult {
                protocol_version,
                capabilities: ServerCapabilities {
                    tools: ListChangedCapability { list_changed: false },
                    resources: ResourcesCapability {
                        subscribe: false,
                        list_changed: false,
                    },
                    prompts: ListChangedCapability { list_changed: false },
                },
                server_info: self.info.clone(),
                instructions: Some(INSTRUCTIONS.to_string()),
            },
        )
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match parse_params(params) {
            Ok(params) => params,
            Err(error) => return JsonRpcResponse::error(id, error),
        };

        tracing::debug!(tool = %params.name, "Calling tool");
        match self.registry.call(&params.name, params.arguments).await {
            Ok(result) => respond(id, &result),
            Err(err @ RegistryError::UnknownTool(_)) => {
                JsonRpcResponse::error(id, JsonRpcError::invalid_params(err.to_string()))
            }
            Err(err) => JsonRpcResponse::error(id, JsonRpcError::internal_error(err.to_string())),
        }
    }

    fn handle_read_resource(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: ReadResourceParams = match parse_params(params) {
            Ok(params) => params,
            Err(error) => return JsonRpcResponse::error(id, error),
        };

        match self.resources.read(&params.uri) {
            Ok(result) => respond(id, &result),
            Err(err) => JsonRpcResponse::error(id, JsonRpcError::invalid_params(err.to_string())),
        }
    }

    fn handle_get_prompt(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: GetPromptParams = match parse_params(params) {
            Ok(params) => params,
            Err(error) => return JsonRpcResponse::error(id, error),
        };

        match self.prompts.get(&params.name, &params.arguments) {
            Ok(result) => respond(id, &result),
            Err(err) => JsonRpcResponse::error(id, JsonRpcError::invalid_params(err.to_string())),
        }
    }
}

fn parse_line(line: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        tracing::warn!(error = %e, "Unparseable message");
        JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error())
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|_| JsonRpcResponse::error(id, JsonRpcError::invalid_request()))
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, JsonRpcError> {
    serde_json::from_value(params.unwrap_or(Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {}", e)))
}

fn respond<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
    }
}

async fn cancel(params: Option<Value>, in_flight: &InFlight) {
    let params: CancelledParams = match parse_params(params) {
        Ok(params) => params,
        Err(error) => {
            tracing::debug!(error = %error.message, "Malformed cancellation");
            return;
        }
    };

    let key = params.request_id.to_string();
    match in_flight.lock().await.remove(&key) {
        Some(handle) => {
            handle.abort();
            tracing::info!(
                request_id = %key,
                reason = params.reason.as_deref().unwrap_or("unspecified"),
                "Cancelled tool call"
            );
        }
        None => tracing::debug!(request_id = %key, "Nothing to cancel"),
    }
}
