//! Catalog-specific error types.

use std::path::PathBuf;
use thiserror::Error;

use super::station::FuelType;

/// A station record that breaks the catalog invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrityError {
    /// A station has no price for one of the fuel types.
    #[error("station '{station}' has no {fuel_type} price")]
    MissingPrice { station: String, fuel_type: FuelType },

    /// A price is negative, NaN or infinite.
    #[error("station '{station}' has invalid {fuel_type} price {price}")]
    InvalidPrice {
        station: String,
        fuel_type: FuelType,
        price: f64,
    },
}

impl IntegrityError {
    /// Create a "missing price" error.
    pub fn missing_price(station: impl Into<String>, fuel_type: FuelType) -> Self {
        Self::MissingPrice {
            station: station.into(),
            fuel_type,
        }
    }

    /// Create an "invalid price" error.
    pub fn invalid_price(station: impl Into<String>, fuel_type: FuelType, price: f64) -> Self {
        Self::InvalidPrice {
            station: station.into(),
            fuel_type,
            price,
        }
    }
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid station JSON.
    #[error("Invalid station data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record breaks the catalog invariants.
    #[error("Data integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}

impl CatalogError {
    /// Create a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
