//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{City, CityId, Code, Money, ShippingQuote};

/// A city in lookup and search results.
#[derive(Debug, Serialize)]
pub struct CityResult {
    /// Store id, used to request a quote
    pub id: CityId,

    /// Region code
    pub code: String,

    /// City name
    pub name: String,

    /// Administrative region
    pub region: Option<String>,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl CityResult {
    /// Convert a domain city.
    pub fn from_city(city: &City) -> Self {
        Self {
            id: city.id,
            code: city.code.as_str().to_string(),
            name: city.name.clone(),
            region: city.region.clone(),
            latitude: city.coordinate.latitude(),
            longitude: city.coordinate.longitude(),
        }
    }
}

/// A country in the code listing.
#[derive(Debug, Serialize)]
pub struct CodeResult {
    pub code: String,
    pub name: String,
}

impl CodeResult {
    /// Convert a domain code.
    pub fn from_code(code: &Code) -> Self {
        Self {
            code: code.code.as_str().to_string(),
            name: code.name.clone(),
        }
    }
}

/// Response for a shipping calculation.
#[derive(Debug, Serialize)]
pub struct ShipResponse {
    /// Distance in whole kilometres
    pub distance: u64,

    /// Cost of shipping
    pub cost: Money,
}

impl ShipResponse {
    /// Convert a domain quote.
    pub fn from_quote(quote: &ShippingQuote) -> Self {
        Self {
            distance: quote.distance_km(),
            cost: quote.cost(),
        }
    }
}

/// Response for a dispatched order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub order_id: String,
    pub status: String,
    pub response_code: String,
    pub message: String,
    /// Request body as received, if any
    pub payload: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
