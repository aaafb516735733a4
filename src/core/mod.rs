//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, server lifecycle management,
//! and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};

use std::sync::Arc;

use tracing::info;

use crate::domains::catalog::Catalog;

/// Validate `config`, load the catalog and serve it until the transport
/// shuts down. A catalog that fails integrity checks is never served.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let catalog = Arc::new(Catalog::load(&config.catalog)?);
    info!("Loaded {} stations", catalog.len());

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, catalog);
    info!("Server initialized");

    transport.run(server).await?;
    Ok(())
}
