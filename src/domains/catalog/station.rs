//! Station record types.
//!
//! These types mirror the JSON shape of the bundled dataset one to one, so a
//! station serializes back exactly as it was loaded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::IntegrityError;

// ============================================================================
// Fuel Type
// ============================================================================

/// Fuel grades priced at every station.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Unleaded 95 octane.
    Unleaded95,
    /// Unleaded 98 octane.
    Unleaded98,
    /// Diesel.
    #[default]
    Diesel,
}

impl FuelType {
    /// Every fuel type, in wire order.
    pub const ALL: [FuelType; 3] = [Self::Unleaded95, Self::Unleaded98, Self::Diesel];

    /// The wire name used in arguments and price maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unleaded95 => "unleaded95",
            Self::Unleaded98 => "unleaded98",
            Self::Diesel => "diesel",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a fuel type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fuel type '{0}'")]
pub struct UnknownFuelType(pub String);

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| UnknownFuelType(s.to_string()))
    }
}

// ============================================================================
// Station Record
// ============================================================================

/// Where a station is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub address: String,
}

/// An active promotion at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Short promotion category, e.g. "discount".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Price per litre for each fuel type, kept as the numbers the dataset wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prices(BTreeMap<FuelType, Number>);

impl Prices {
    /// Price for `fuel`, if the station lists one.
    pub fn get(&self, fuel: FuelType) -> Option<f64> {
        self.0.get(&fuel).and_then(Number::as_f64)
    }

    /// Price for `fuel` exactly as written in the dataset.
    pub fn number(&self, fuel: FuelType) -> Option<&Number> {
        self.0.get(&fuel)
    }
}

/// Non-finite prices have no JSON form and are left out.
impl FromIterator<(FuelType, f64)> for Prices {
    fn from_iter<I: IntoIterator<Item = (FuelType, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|(fuel, price)| Number::from_f64(price).map(|n| (fuel, n)))
                .collect(),
        )
    }
}

/// A single fuel station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    pub location: Location,
    /// Pre-computed distance along the route, passed through untouched.
    pub distance_from_origin: Number,
    pub prices: Prices,
    pub offers: Vec<Offer>,
    pub amenities: Vec<String>,
}

impl Station {
    /// Price of `fuel` at this station.
    ///
    /// A missing price is a data-integrity failure; it is never treated as
    /// zero or infinity.
    pub fn price(&self, fuel: FuelType) -> Result<f64, IntegrityError> {
        self.prices
            .get(fuel)
            .ok_or_else(|| IntegrityError::missing_price(&self.name, fuel))
    }

    /// Price of `fuel` as written in the dataset, for echoing back to clients.
    pub fn quoted_price(&self, fuel: FuelType) -> Result<Number, IntegrityError> {
        self.prices
            .number(fuel)
            .cloned()
            .ok_or_else(|| IntegrityError::missing_price(&self.name, fuel))
    }

    /// Whether the station currently runs any promotion.
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }

    /// Check that every fuel type has a finite, non-negative price.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        for fuel in FuelType::ALL {
            let price = self.price(fuel)?;
            if !price.is_finite() || price < 0.0 {
                return Err(IntegrityError::invalid_price(&self.name, fuel, price));
            }
        }
        Ok(())
    }
}

/// Icon shown next to an amenity tag. Unknown tags get a generic checkmark.
pub fn amenity_icon(amenity: &str) -> &'static str {
    match amenity {
        "Shop" => "🛒",
        "Coffee" => "☕",
        "Restrooms" => "🚻",
        "Car wash" => "🚿",
        "Rest area" => "🅿️",
        _ => "✓",
    }
}
