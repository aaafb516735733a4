//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the station queries clients can call: route listing, offer
//! filtering and cheapest-N selection over the shared catalog.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `args.rs` - Argument decoding shared by all tools
//! - `registry.rs` - Tool kinds, validated calls and the dispatch point
//! - `router.rs` - rmcp ToolRouter builder for STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `Deserialize` + `JsonSchema`
//!    params type, `from_args()`, `execute()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolKind` and a `ToolCall` variant in `registry.rs`
//!
//! The router and the HTTP transport pick the new tool up from the registry.

mod args;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::{ErrorKind, ToolError};
pub use registry::{ToolCall, ToolKind, ToolOutput, ToolRegistry};
pub use router::build_tool_router;
