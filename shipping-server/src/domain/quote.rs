//! Shipping quotes and the tariff they are priced with.

use super::Money;

/// Error returned when constructing a tariff with an unusable rate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid tariff: {0} cents per km")]
pub struct InvalidTariff(f64);

/// Linear price per kilometre, in cents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    cents_per_km: f64,
}

impl Tariff {
    /// Five cents per kilometre.
    pub const STANDARD: Tariff = Tariff { cents_per_km: 5.0 };

    /// Create a tariff. The rate must be finite and non-negative.
    pub fn new(cents_per_km: f64) -> Result<Self, InvalidTariff> {
        if !cents_per_km.is_finite() || cents_per_km < 0.0 {
            return Err(InvalidTariff(cents_per_km));
        }
        Ok(Self { cents_per_km })
    }

    /// Rate in cents per kilometre.
    pub fn cents_per_km(&self) -> f64 {
        self.cents_per_km
    }

    /// Price a distance.
    ///
    /// The product is rounded to whole cents before it becomes a money
    /// value, so the amount never carries more than two fractional digits.
    pub fn price(&self, distance_km: u64) -> Money {
        let cents = (distance_km as f64 * self.cents_per_km).round();
        Money::from_cents(cents as u64)
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Distance and cost of shipping to one destination.
///
/// The cost is always derived from the distance through a [`Tariff`]; the
/// fields are private so they cannot drift apart.
///
/// # Examples
///
/// ```
/// use shipping_server::domain::{ShippingQuote, Tariff};
///
/// let quote = ShippingQuote::new(477, &Tariff::STANDARD);
/// assert_eq!(quote.distance_km(), 477);
/// assert_eq!(quote.cost().to_string(), "23.85");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingQuote {
    distance_km: u64,
    cost: Money,
}

impl ShippingQuote {
    /// Quote a whole-kilometre distance under the given tariff.
    pub fn new(distance_km: u64, tariff: &Tariff) -> Self {
        Self {
            distance_km,
            cost: tariff.price(distance_km),
        }
    }

    /// Distance in whole kilometres.
    pub fn distance_km(&self) -> u64 {
        self.distance_km
    }

    /// Cost of shipping.
    pub fn cost(&self) -> Money {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tariff_is_five_cents() {
        assert_eq!(Tariff::default().cents_per_km(), 5.0);
        assert_eq!(Tariff::STANDARD.price(1), Money::from_cents(5));
        assert_eq!(Tariff::STANDARD.price(460), Money::from_cents(2300));
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(Tariff::new(-1.0).is_err());
        assert!(Tariff::new(f64::NAN).is_err());
        assert!(Tariff::new(f64::INFINITY).is_err());
        assert!(Tariff::new(0.0).is_ok());
    }

    #[test]
    fn fractional_rate_rounds_to_whole_cents() {
        let tariff = Tariff::new(2.5).unwrap();
        // 3 km * 2.5 = 7.5 cents, rounded half away from zero
        assert_eq!(tariff.price(3), Money::from_cents(8));
        // 1 km * 2.5 = 2.5 cents
        assert_eq!(tariff.price(1), Money::from_cents(3));
        assert_eq!(tariff.price(2), Money::from_cents(5));
    }

    #[test]
    fn zero_distance_costs_nothing() {
        let quote = ShippingQuote::new(0, &Tariff::STANDARD);
        assert_eq!(quote.distance_km(), 0);
        assert_eq!(quote.cost(), Money::ZERO);
    }

    #[test]
    fn quote_cost_tracks_distance() {
        let quote = ShippingQuote::new(477, &Tariff::STANDARD);
        assert_eq!(quote.cost().cents(), 2385);
    }
}
