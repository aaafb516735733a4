//! Station catalog resource definition.

use super::{DynamicResourceProvider, ResourceContext, ResourceDefinition};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::ResourceKind;
use rmcp::model::ResourceContents;

/// The full station catalog as JSON (dynamic).
pub struct StationCatalogResource;

impl ResourceDefinition for StationCatalogResource {
    const URI: &'static str = "stations://catalog";
    const NAME: &'static str = "Station Catalog";
    const DESCRIPTION: &'static str =
        "All Shell stations with location, fuel prices, offers and amenities";
    const MIME_TYPE: &'static str = "application/json";
    const KIND: ResourceKind = ResourceKind::Catalog;
}

impl DynamicResourceProvider for StationCatalogResource {
    fn resolve(uri: &str, context: &ResourceContext) -> Result<ResourceContents, ResourceError> {
        Ok(ResourceContents::text(context.catalog.to_json_pretty()?, uri))
    }
}
