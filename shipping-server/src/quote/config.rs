//! Quote configuration.

use crate::domain::{Coordinate, ShippingQuote, Tariff};

use super::estimator::estimate_with;

/// Latitude of the warehouse everything ships from.
const WAREHOUSE_LATITUDE: f64 = 51.164896;

/// Longitude of the warehouse everything ships from.
const WAREHOUSE_LONGITUDE: f64 = 7.068792;

/// Where shipments leave from and how they are priced.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Warehouse location.
    pub origin: Coordinate,

    /// Price per kilometre.
    pub tariff: Tariff,
}

impl QuoteConfig {
    /// Create a new configuration.
    pub fn new(origin: Coordinate, tariff: Tariff) -> Self {
        Self { origin, tariff }
    }

    /// Set a different tariff.
    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    /// Quote shipping from the warehouse to `destination`.
    pub fn quote_to(&self, destination: &Coordinate) -> ShippingQuote {
        estimate_with(&self.origin, destination, &self.tariff)
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            origin: Coordinate::new(WAREHOUSE_LATITUDE, WAREHOUSE_LONGITUDE)
                .expect("warehouse coordinate is in range"),
            tariff: Tariff::STANDARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuoteConfig::default();

        assert_eq!(config.origin.latitude(), 51.164896);
        assert_eq!(config.origin.longitude(), 7.068792);
        assert_eq!(config.tariff, Tariff::STANDARD);
    }

    #[test]
    fn quote_to_uses_origin_and_tariff() {
        let berlin = Coordinate::new(52.520008, 13.404954).unwrap();

        let standard = QuoteConfig::default().quote_to(&berlin);
        assert_eq!(standard.distance_km(), 460);
        assert_eq!(standard.cost().cents(), 2300);

        let doubled = QuoteConfig::default()
            .with_tariff(Tariff::new(10.0).unwrap())
            .quote_to(&berlin);
        assert_eq!(doubled.distance_km(), 460);
        assert_eq!(doubled.cost().cents(), 4600);
    }

    #[test]
    fn custom_origin() {
        let berlin = Coordinate::new(52.520008, 13.404954).unwrap();
        let config = QuoteConfig::new(berlin, Tariff::STANDARD);

        assert_eq!(config.quote_to(&berlin).distance_km(), 0);
    }
}
