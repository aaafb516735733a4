//! Station catalog domain module.
//!
//! The catalog is the in-memory set of station records every tool queries.
//! It is loaded once at startup and shared read-only behind an `Arc`; queries
//! that reorder or filter stations always work on a copy.
//!
//! ## Architecture
//!
//! - `station.rs` - Record types (`Station`, `Prices`, `FuelType`, ...)
//! - `error.rs` - Load and integrity errors

mod error;
mod station;

pub use error::{CatalogError, IntegrityError};
pub use station::{FuelType, Location, Offer, Prices, Station, UnknownFuelType, amenity_icon};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::config::CatalogConfig;

/// Dataset compiled into the binary, used when no path is configured.
const BUNDLED_STATIONS: &str = include_str!("../../../data/stations.json");

/// On-disk layout of a station dataset.
#[derive(Debug, Serialize, Deserialize)]
struct StationFile {
    stations: Vec<Station>,
}

/// Ordered, read-only collection of stations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    stations: Vec<Station>,
}

impl Catalog {
    /// Wrap `stations` as-is, without integrity checks.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Parse a `{ "stations": [...] }` document and validate every record.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: StationFile = serde_json::from_str(text)?;
        let catalog = Self::new(file.stations);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog described by `config`.
    ///
    /// Reads the configured file if there is one, the bundled dataset
    /// otherwise.
    #[instrument(skip_all)]
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.path {
            Some(path) => {
                info!("Loading stations from {}", path.display());
                let text =
                    std::fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
                Self::from_json(&text)?
            }
            None => {
                info!("Loading bundled station dataset");
                Self::from_json(BUNDLED_STATIONS)?
            }
        };

        info!("Catalog loaded with {} stations", catalog.len());
        Ok(catalog)
    }

    /// Check every station against the catalog invariants.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        self.stations.iter().try_for_each(Station::validate)
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Serialize the catalog back to its file layout.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            stations: &'a [Station],
        }
        serde_json::to_string_pretty(&Borrowed {
            stations: &self.stations,
        })
    }
}

/// Copy of `stations` ordered by ascending `fuel` price.
///
/// The sort is stable, so equally priced stations keep their catalog order.
/// `0.0` and `-0.0` compare equal.
pub fn sorted_by_price(stations: &[Station], fuel: FuelType) -> Result<Vec<Station>, IntegrityError> {
    let mut keyed = stations
        .iter()
        .map(|station| Ok((station.price(fuel)?, station)))
        .collect::<Result<Vec<_>, IntegrityError>>()?;

    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    Ok(keyed.into_iter().map(|(_, station)| station.clone()).collect())
}
