//! Cheapest stations tool definition.
//!
//! Ranks the catalog by the price of one fuel type and returns the first
//! `limit` stations.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use tracing::{info, instrument};

use crate::domains::catalog::{Catalog, FuelType, Station, sorted_by_price};
use crate::domains::tools::args::{count, decode};
use crate::domains::tools::error::ToolError;

/// Number of stations returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 3;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn limit_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    Ok(count(deserializer)?.unwrap_or(DEFAULT_LIMIT))
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the cheapest stations tool.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCheapestStationsParams {
    /// Type of fuel to compare prices
    pub fuel_type: FuelType,

    /// Maximum number of stations to return (default: 3)
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: usize,
}

impl GetCheapestStationsParams {
    /// Validate raw tool arguments.
    pub fn from_args(args: &JsonObject) -> Result<Self, ToolError> {
        decode(args)
    }
}

/// Result payload of the cheapest stations tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestStations {
    pub fuel_type: FuelType,
    pub cheapest_stations: Vec<Station>,
    /// Price at the first station; omitted when there is no station at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<Number>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Cheapest stations tool - top N stations by fuel price.
pub struct GetCheapestStationsTool;

impl GetCheapestStationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_cheapest_stations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the cheapest gas stations sorted by fuel price";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(fuel_type = %params.fuel_type, limit = params.limit))]
    pub fn execute(
        params: &GetCheapestStationsParams,
        catalog: &Catalog,
    ) -> Result<CheapestStations, ToolError> {
        let mut stations = sorted_by_price(catalog.stations(), params.fuel_type)?;
        stations.truncate(params.limit);

        let lowest_price = stations
            .first()
            .map(|s| s.quoted_price(params.fuel_type))
            .transpose()?;

        info!(
            "Returning {} cheapest stations for {}",
            stations.len(),
            params.fuel_type
        );

        Ok(CheapestStations {
            fuel_type: params.fuel_type,
            cheapest_stations: stations,
            lowest_price,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCheapestStationsParams>(),
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
