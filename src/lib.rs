//! Shell Stations MCP Server Library
//!
//! This crate exposes a small catalog of Shell fuel stations to MCP clients
//! through three tools: stations on a route ordered by price, stations with
//! active offers, and the cheapest stations for a fuel type.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: Station records, dataset loading and integrity checks
//!   - **tools**: Tool definitions, argument validation and dispatch
//!   - **resources**: Read-only views of the catalog and server metadata
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shell_stations_mcp::{core::Config, core::McpServer, domains::catalog::Catalog};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let catalog = Catalog::load(&config.catalog)?;
//!     let server = McpServer::new(config, Arc::new(catalog));
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
