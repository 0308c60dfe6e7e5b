//! Distance and cost estimation.
//!
//! Turns a pair of coordinates into a [`ShippingQuote`](crate::domain::ShippingQuote):
//! haversine distance rounded to whole kilometres, priced with a linear
//! per-kilometre tariff. Pure functions only; no I/O.

mod config;
mod estimator;

pub use config::QuoteConfig;
pub use estimator::{EARTH_RADIUS_KM, estimate, estimate_with, haversine_km};
