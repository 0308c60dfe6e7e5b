//! Great-circle distance and shipping cost.

use crate::domain::{Coordinate, ShippingQuote, Tariff};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lng = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Clamp guards asin against a hair over 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Quote shipping between two points at the standard tariff.
///
/// The distance is rounded to the nearest whole kilometer; quotes are
/// deliberately coarse.
pub fn estimate(origin: &Coordinate, destination: &Coordinate) -> ShippingQuote {
    estimate_with(origin, destination, &Tariff::STANDARD)
}

/// Quote shipping between two points at a given tariff.
pub fn estimate_with(
    origin: &Coordinate,
    destination: &Coordinate,
    tariff: &Tariff,
) -> ShippingQuote {
    let distance_km = haversine_km(origin, destination).round() as u64;
    ShippingQuote::new(distance_km, tariff)
}
