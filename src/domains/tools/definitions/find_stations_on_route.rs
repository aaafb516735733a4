//! Find stations on route tool definition.
//!
//! Lists every station in the catalog ordered by the price of the requested
//! fuel. The route endpoints are echoed back; they do not filter stations.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::catalog::{Catalog, FuelType, Station, sorted_by_price};
use crate::domains::tools::args::{decode, non_blank, null_as_default};
use crate::domains::tools::error::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the find stations on route tool.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindStationsOnRouteParams {
    /// Origin city (e.g., 'A Coruña')
    pub origin: String,

    /// Destination city (e.g., 'Madrid')
    pub destination: String,

    /// Type of fuel
    #[serde(default, deserialize_with = "null_as_default")]
    pub fuel_type: FuelType,
}

impl FindStationsOnRouteParams {
    /// Validate raw tool arguments.
    pub fn from_args(args: &JsonObject) -> Result<Self, ToolError> {
        let params: Self = decode(args)?;
        Ok(Self {
            origin: non_blank("origin", &params.origin)?,
            destination: non_blank("destination", &params.destination)?,
            fuel_type: params.fuel_type,
        })
    }
}

/// Result payload of the find stations on route tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStations {
    pub route: String,
    pub stations: Vec<Station>,
    pub total_stations: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Find stations on route tool - all stations, cheapest first.
pub struct FindStationsOnRouteTool;

impl FindStationsOnRouteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "find_stations_on_route";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Find Shell gas stations along a route between two cities";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(origin = %params.origin, destination = %params.destination))]
    pub fn execute(
        params: &FindStationsOnRouteParams,
        catalog: &Catalog,
    ) -> Result<RouteStations, ToolError> {
        info!(
            "Finding stations from {} to {} by {} price",
            params.origin, params.destination, params.fuel_type
        );

        let stations = sorted_by_price(catalog.stations(), params.fuel_type)?;

        Ok(RouteStations {
            route: format!("{} → {}", params.origin, params.destination),
            total_stations: stations.len(),
            stations,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FindStationsOnRouteParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
