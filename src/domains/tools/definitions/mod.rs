//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod find_stations_on_route;
pub mod get_best_offers;
pub mod get_cheapest_stations;

pub use find_stations_on_route::{FindStationsOnRouteParams, FindStationsOnRouteTool, RouteStations};
pub use get_best_offers::{BestOffers, GetBestOffersParams, GetBestOffersTool};
pub use get_cheapest_stations::{
    CheapestStations, DEFAULT_LIMIT, GetCheapestStationsParams, GetCheapestStationsTool,
};
