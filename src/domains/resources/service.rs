//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource};
use tracing::{debug, info};

use super::definitions::{
    DynamicResourceProvider, ResourceContext, ServerInfoResource, StationCatalogResource,
};
use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// State handed to dynamic resources.
    context: ResourceContext,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Which provider renders this resource.
    pub kind: ResourceKind,
}

/// Resources the server knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// The full station catalog.
    Catalog,

    /// Server and dataset summary.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService over the given context.
    pub fn new(context: ResourceContext) -> Self {
        let resources = get_all_resources();
        info!("Initializing ResourceService with {} resources", resources.len());
        for entry in &resources {
            debug!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { context, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|e| e.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match entry.kind {
            ResourceKind::Catalog => StationCatalogResource::resolve(uri, &self.context)?,
            ResourceKind::ServerInfo => ServerInfoResource::resolve(uri, &self.context)?,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::catalog::test_support::sample_catalog;
    use rmcp::model::ResourceContents;
    use std::sync::Arc;

    fn test_service() -> ResourceService {
        ResourceService::new(ResourceContext {
            server: Config::default().server,
            catalog: Arc::new(sample_catalog()),
        })
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = test_service().list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].raw.uri, "stations://catalog");
    }

    #[tokio::test]
    async fn test_read_catalog_resource() {
        let result = test_service().read_resource("stations://catalog").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().contents.len(), 1);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = test_service().read_resource("stations://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_every_listed_resource_is_readable() {
        let service = test_service();
        for resource in tokio_test::block_on(service.list_resources()) {
            let result = tokio_test::block_on(service.read_resource(&resource.raw.uri)).unwrap();
            let ResourceContents::TextResourceContents { text, uri, .. } = &result.contents[0]
            else {
                panic!("Expected text contents");
            };
            assert_eq!(uri, &resource.raw.uri);
            assert!(serde_json::from_str::<serde_json::Value>(text).is_ok());
        }
    }
}
