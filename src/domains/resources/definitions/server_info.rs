//! Server info resource definition.

use super::{DynamicResourceProvider, ResourceContext, ResourceDefinition};
use crate::domains::resources::error::ResourceError;
use crate::domains::catalog::{Catalog, amenity_icon};
use crate::domains::resources::service::ResourceKind;
use crate::domains::tools::ToolRegistry;
use rmcp::model::ResourceContents;
use std::collections::BTreeMap;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "stations://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server and its station data";
    const MIME_TYPE: &'static str = "application/json";
    const KIND: ResourceKind = ResourceKind::ServerInfo;
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, context: &ResourceContext) -> Result<ResourceContents, ResourceError> {
        let tools: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name)
            .collect();

        let info = serde_json::json!({
            "server": context.server.name,
            "version": context.server.version,
            "stations": context.catalog.len(),
            "tools": tools,
            "amenities": amenity_summary(&context.catalog),
        });

        Ok(ResourceContents::text(serde_json::to_string_pretty(&info)?, uri))
    }
}

/// Amenity tags with their display icon and how many stations offer them.
fn amenity_summary(catalog: &Catalog) -> Vec<serde_json::Value> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for station in catalog.stations() {
        for amenity in &station.amenities {
            *counts.entry(amenity.as_str()).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, stations)| {
            serde_json::json!({ "name": name, "icon": amenity_icon(name), "stations": stations })
        })
        .collect()
}
