//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! This module builds the ToolRouter for STDIO transport. Every route is
//! generated from `ToolKind::ALL` and dispatches through `ToolRegistry`, so
//! the router never carries its own copy of a schema or handler.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::{ToolKind, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolKind::ALL
        .into_iter()
        .fold(ToolRouter::new(), |router, kind| {
            router.with_route(create_route(kind, registry.clone()))
        })
}

/// Create the ToolRoute for one tool.
fn create_route<S>(kind: ToolKind, registry: ToolRegistry) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(kind.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        async move { Ok::<_, McpError>(registry.call_tool(kind.name(), &args)) }.boxed()
    })
}
