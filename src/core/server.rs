//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `domains/tools/registry.rs`. The rmcp ToolRouter and
//! the HTTP transport both dispatch through the same `ToolRegistry`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    catalog::Catalog,
    resources::{ResourceContext, ResourceService},
    tools::{ToolKind, ToolRegistry, build_tool_router},
};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Shell fuel station assistant. Use find_stations_on_route to list \
     stations between two cities ordered by fuel price, get_best_offers for stations with active \
     promotions, and get_cheapest_stations for the N cheapest stations for a fuel type \
     (unleaded95, unleaded98 or diesel).";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatch over the shared catalog.
    tool_registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over an already loaded catalog.
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        let config = Arc::new(config);
        let tool_registry = ToolRegistry::new(catalog.clone());

        let resource_service = Arc::new(ResourceService::new(ResourceContext {
            server: config.server.clone(),
            catalog,
        }));

        Self {
            tool_router: build_tool_router::<Self>(tool_registry.clone()),
            tool_registry,
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// An unknown tool name is a request error. Anything else, including
    /// invalid arguments, comes back as a tool result with `isError` set.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        if ToolKind::from_name(name).is_none() {
            return Err(format!("Unknown tool: {}", name));
        }

        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => return Err(format!("Tool arguments must be an object, got {}", other)),
        };

        let result = self.tool_registry.call_tool(name, &arguments);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::test_support::sample_catalog;
    use rmcp::ServiceExt;
    use serde_json::{Value, json};
    use tokio::io::{
        AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf, WriteHalf,
    };

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(sample_catalog()))
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        let instructions = info.instructions.unwrap();
        for kind in ToolKind::ALL {
            assert!(instructions.contains(kind.name()));
        }
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 3);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_call_tool_success() {
        let result = test_server()
            .call_tool(
                "get_cheapest_stations",
                serde_json::json!({ "fuelType": "diesel", "limit": 1 }),
            )
            .unwrap();
        assert_eq!(result["isError"], false);

        let text = result["content"][0]["text"].as_str().unwrap();
        let payload: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["lowestPrice"], serde_json::json!(1.45));
        assert_eq!(payload["cheapestStations"][0]["name"], "Bravo");
    }

    #[test]
    fn test_call_tool_invalid_args_is_error_result() {
        let result = test_server()
            .call_tool("get_cheapest_stations", serde_json::Value::Null)
            .unwrap();
        assert_eq!(result["isError"], true);
        assert!(
            result["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("fuelType")
        );
    }

    #[test]
    fn test_call_tool_unknown() {
        let err = test_server()
            .call_tool("not_a_tool", serde_json::json!({}))
            .unwrap_err();
        assert!(err.contains("not_a_tool"));
    }

    #[tokio::test]
    async fn test_read_resource() {
        let server = test_server();
        assert_eq!(server.list_resources().await.len(), 2);
        assert!(server.read_resource("stations://catalog").await.is_ok());
        assert!(server.read_resource("stations://missing").await.is_err());
    }

    /// Newline-delimited JSON-RPC client over an in-memory stream.
    struct StreamClient {
        lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
        writer: WriteHalf<DuplexStream>,
    }

    impl StreamClient {
        async fn send(&mut self, message: Value) {
            let mut line = message.to_string();
            line.push('\n');
            self.writer.write_all(line.as_bytes()).await.unwrap();
        }

        async fn response(&mut self, id: u64) -> Value {
            loop {
                let line = self.lines.next_line().await.unwrap().expect("stream closed");
                let message: Value = serde_json::from_str(&line).unwrap();
                if message["id"] == json!(id) {
                    return message;
                }
            }
        }

        async fn call(&mut self, id: u64, name: &str, arguments: Value) -> Value {
            self.send(json!({
                "jsonrpc": "2.0", "id": id, "method": "tools/call",
                "params": { "name": name, "arguments": arguments }
            }))
            .await;
            self.response(id).await
        }
    }

    async fn connected_client() -> StreamClient {
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            let running = test_server().serve(server_io).await.unwrap();
            let _ = running.waiting().await;
        });

        let (reader, writer) = tokio::io::split(client_io);
        let mut client = StreamClient {
            lines: BufReader::new(reader).lines(),
            writer,
        };

        client
            .send(json!({
                "jsonrpc": "2.0", "id": 0, "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "stations-test", "version": "0.0.0" }
                }
            }))
            .await;
        let init = client.response(0).await;
        assert!(init["result"]["capabilities"]["tools"].is_object());

        client
            .send(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
            .await;
        client
    }

    #[tokio::test]
    async fn test_stream_tool_calls_dispatch_through_registry() {
        let mut client = connected_client().await;

        let ok = client
            .call(1, "get_cheapest_stations", json!({ "fuelType": "diesel", "limit": 1 }))
            .await;
        assert_eq!(ok["result"]["isError"], false);
        let payload: Value =
            serde_json::from_str(ok["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(payload["cheapestStations"][0]["name"], "Bravo");

        let invalid = client
            .call(2, "get_cheapest_stations", json!({ "fuelType": "lpg" }))
            .await;
        assert_eq!(invalid["result"]["isError"], true);
        assert!(
            invalid["result"]["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("fuelType")
        );

        let unknown = client.call(3, "not_a_tool", json!({})).await;
        assert_eq!(unknown["error"]["code"], -32602);
    }
}
