//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - `ToolKind`, the closed set of registered tools and their metadata
//! - `ToolCall`, a validated invocation ready to run against the catalog
//! - `ToolRegistry`, the single dispatch point used by every transport
//!
//! Adding a tool means adding a `ToolKind` variant and its `ToolCall`
//! counterpart; the compiler points at every match that needs a new arm.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::definitions::{
    BestOffers, CheapestStations, FindStationsOnRouteParams, FindStationsOnRouteTool,
    GetBestOffersParams, GetBestOffersTool, GetCheapestStationsParams, GetCheapestStationsTool,
    RouteStations,
};
use super::error::ToolError;
use crate::domains::catalog::Catalog;

// ============================================================================
// Tool Kinds
// ============================================================================

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    FindStationsOnRoute,
    GetBestOffers,
    GetCheapestStations,
}

impl ToolKind {
    /// All registered tools, in advertised order.
    pub const ALL: [ToolKind; 3] = [
        Self::FindStationsOnRoute,
        Self::GetBestOffers,
        Self::GetCheapestStations,
    ];

    /// Tool name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Self::FindStationsOnRoute => FindStationsOnRouteTool::NAME,
            Self::GetBestOffers => GetBestOffersTool::NAME,
            Self::GetCheapestStations => GetCheapestStationsTool::NAME,
        }
    }

    /// Look a tool up by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool metadata (name, description, input schema).
    pub fn to_tool(self) -> Tool {
        match self {
            Self::FindStationsOnRoute => FindStationsOnRouteTool::to_tool(),
            Self::GetBestOffers => GetBestOffersTool::to_tool(),
            Self::GetCheapestStations => GetCheapestStationsTool::to_tool(),
        }
    }
}

// ============================================================================
// Tool Calls
// ============================================================================

/// A tool invocation whose arguments passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    FindStationsOnRoute(FindStationsOnRouteParams),
    GetBestOffers(GetBestOffersParams),
    GetCheapestStations(GetCheapestStationsParams),
}

impl ToolCall {
    /// Validate `args` against the schema of `kind`.
    pub fn parse(kind: ToolKind, args: &JsonObject) -> Result<Self, ToolError> {
        Ok(match kind {
            ToolKind::FindStationsOnRoute => {
                Self::FindStationsOnRoute(FindStationsOnRouteParams::from_args(args)?)
            }
            ToolKind::GetBestOffers => Self::GetBestOffers(GetBestOffersParams::from_args(args)?),
            ToolKind::GetCheapestStations => {
                Self::GetCheapestStations(GetCheapestStationsParams::from_args(args)?)
            }
        })
    }

    /// The tool this call targets.
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::FindStationsOnRoute(_) => ToolKind::FindStationsOnRoute,
            Self::GetBestOffers(_) => ToolKind::GetBestOffers,
            Self::GetCheapestStations(_) => ToolKind::GetCheapestStations,
        }
    }

    /// Run the query against `catalog`.
    pub fn execute(&self, catalog: &Catalog) -> Result<ToolOutput, ToolError> {
        Ok(match self {
            Self::FindStationsOnRoute(params) => {
                ToolOutput::RouteStations(FindStationsOnRouteTool::execute(params, catalog)?)
            }
            Self::GetBestOffers(params) => {
                ToolOutput::BestOffers(GetBestOffersTool::execute(params, catalog)?)
            }
            Self::GetCheapestStations(params) => {
                ToolOutput::CheapestStations(GetCheapestStationsTool::execute(params, catalog)?)
            }
        })
    }
}

/// Result payload of a tool call. Serializes as the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    RouteStations(RouteStations),
    BestOffers(BestOffers),
    CheapestStations(CheapestStations),
}

impl ToolOutput {
    /// Pretty-printed JSON text, as sent in the text content of a result.
    pub fn to_json_text(&self) -> Result<String, ToolError> {
        serde_json::to_string_pretty(self).map_err(|e| ToolError::internal(e.to_string()))
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - dispatches tool calls against the shared catalog.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    catalog: Arc<Catalog>,
}

impl ToolRegistry {
    /// Create a new tool registry over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.to_tool()).collect()
    }

    /// Validate and run one tool call.
    ///
    /// Arguments are checked before any query runs; a failure never leaves a
    /// partial result behind.
    #[instrument(skip(self, arguments))]
    pub fn dispatch(&self, name: &str, arguments: &JsonObject) -> Result<ToolOutput, ToolError> {
        let kind = ToolKind::from_name(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::unknown_tool(name)
        })?;

        let call = ToolCall::parse(kind, arguments).inspect_err(|e| warn!(kind = ?e.kind(), "{}", e))?;
        debug!(tool = call.kind().name(), ?call, "Arguments validated");

        call.execute(&self.catalog)
    }

    /// Run a tool call and wrap the outcome as an MCP tool result.
    ///
    /// Success carries the JSON payload as text content; any failure becomes
    /// an error result carrying the message.
    pub fn call_tool(&self, name: &str, arguments: &JsonObject) -> CallToolResult {
        match self.dispatch(name, arguments).and_then(|out| out.to_json_text()) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::test_support::{sample_catalog, station};
    use crate::domains::catalog::FuelType;
    use crate::domains::tools::ErrorKind;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(sample_catalog()))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let names: Vec<_> = ToolRegistry::get_all_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["find_stations_on_route", "get_best_offers", "get_cheapest_stations"]
        );
    }

    #[test]
    fn test_tool_kind_lookup() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_tool().name, kind.name());
        }
        assert_eq!(ToolKind::from_name("not_a_tool"), None);
    }

    #[test]
    fn test_get_all_tools_have_descriptions_and_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 3);
        for tool in tools {
            assert!(tool.description.is_some());
            assert_eq!(tool.input_schema["type"], "object");
        }
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let err = registry().dispatch("not_a_tool", &JsonObject::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTool);
        assert!(err.to_string().contains("not_a_tool"));
    }

    #[test]
    fn test_dispatch_missing_required_field() {
        let err = registry()
            .dispatch("get_cheapest_stations", &JsonObject::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgs);
        assert!(matches!(err, ToolError::InvalidArgs { ref field, .. } if field == "fuelType"));
    }

    #[test]
    fn test_dispatch_fuel_type_outside_domain() {
        let err = registry()
            .dispatch(
                "find_stations_on_route",
                &args(json!({ "origin": "A", "destination": "B", "fuelType": "lpg" })),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgs);
    }

    #[test]
    fn test_dispatch_cheapest_scenario() {
        let output = registry()
            .dispatch(
                "get_cheapest_stations",
                &args(json!({ "fuelType": "diesel", "limit": 2 })),
            )
            .unwrap();

        let ToolOutput::CheapestStations(result) = output else {
            panic!("Expected cheapest stations output");
        };
        let prices: Vec<_> = result
            .cheapest_stations
            .iter()
            .map(|s| s.price(FuelType::Diesel).unwrap())
            .collect();
        assert_eq!(prices, [1.450, 1.499]);
        assert_eq!(result.lowest_price.and_then(|n| n.as_f64()), Some(1.450));
    }

    #[test]
    fn test_dispatch_accepts_integral_float_limit() {
        let output = registry()
            .dispatch(
                "get_cheapest_stations",
                &args(json!({ "fuelType": "diesel", "limit": 2.0 })),
            )
            .unwrap();

        let ToolOutput::CheapestStations(result) = output else {
            panic!("Expected cheapest stations output");
        };
        assert_eq!(result.cheapest_stations.len(), 2);
    }

    #[test]
    fn test_dispatch_best_offers_without_arguments() {
        let output = registry()
            .dispatch("get_best_offers", &JsonObject::new())
            .unwrap();
        assert!(matches!(output, ToolOutput::BestOffers(ref r) if r.total == 2));
    }

    #[test]
    fn test_dispatch_surfaces_data_integrity() {
        let mut broken = station("Broken", [1.5, 1.6, 1.4], 0);
        broken.prices = [(FuelType::Diesel, 1.4)].into_iter().collect();
        let registry = ToolRegistry::new(Arc::new(Catalog::new(vec![broken])));

        let err = registry
            .dispatch("get_cheapest_stations", &args(json!({ "fuelType": "unleaded95" })))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let registry = registry();
        let arguments = args(json!({ "origin": "A Coruña", "destination": "Madrid" }));

        let first = registry
            .dispatch("find_stations_on_route", &arguments)
            .unwrap()
            .to_json_text()
            .unwrap();
        let second = registry
            .dispatch("find_stations_on_route", &arguments)
            .unwrap()
            .to_json_text()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dispatch_does_not_reorder_catalog() {
        let catalog = Arc::new(sample_catalog());
        let before = catalog.as_ref().clone();
        ToolRegistry::new(Arc::clone(&catalog))
            .dispatch("get_cheapest_stations", &args(json!({ "fuelType": "diesel" })))
            .unwrap();
        assert_eq!(catalog.as_ref(), &before);
    }

    #[test]
    fn test_call_tool_wraps_success_as_json_text() {
        let result = registry().call_tool(
            "find_stations_on_route",
            &args(json!({ "origin": "A Coruña", "destination": "Madrid", "fuelType": "diesel" })),
        );
        assert!(!result.is_error.unwrap_or(false));

        let payload: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(payload["route"], "A Coruña → Madrid");
        assert_eq!(payload["totalStations"], 3);
    }

    #[test]
    fn test_call_tool_wraps_failure_as_error_content() {
        let result = registry().call_tool("get_cheapest_stations", &JsonObject::new());
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("fuelType"));
    }
}
