//! Best offers tool definition.
//!
//! Returns the stations that currently run at least one promotion, in
//! catalog order.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::catalog::{Catalog, Station};
use crate::domains::tools::args::decode;
use crate::domains::tools::error::ToolError;

/// Parameters for the best offers tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct GetBestOffersParams {
    /// Route in format 'Origin-Destination'
    pub route: Option<String>,
}

impl GetBestOffersParams {
    /// Validate raw tool arguments.
    pub fn from_args(args: &JsonObject) -> Result<Self, ToolError> {
        decode(args)
    }
}

/// Result payload of the best offers tool.
///
/// `total == 0` is a normal outcome meaning no station runs a promotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestOffers {
    pub stations_with_offers: Vec<Station>,
    pub total: usize,
}

/// Best offers tool - stations with active promotions.
pub struct GetBestOffersTool;

impl GetBestOffersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_best_offers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get gas stations with active offers and promotions";

    /// Execute the tool logic.
    ///
    /// The route, when given, is informational only.
    #[instrument(skip_all, fields(route = ?params.route))]
    pub fn execute(params: &GetBestOffersParams, catalog: &Catalog) -> Result<BestOffers, ToolError> {
        let stations_with_offers: Vec<Station> = catalog
            .stations()
            .iter()
            .filter(|s| s.has_offers())
            .cloned()
            .collect();

        info!(
            "{} of {} stations have active offers",
            stations_with_offers.len(),
            catalog.len()
        );

        Ok(BestOffers {
            total: stations_with_offers.len(),
            stations_with_offers,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetBestOffersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
