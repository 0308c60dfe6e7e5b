//! Domain types for the shipping service.
//!
//! This module contains the validated value types shared by the quote
//! calculation, the city search and the web layer. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod city;
mod coordinate;
mod money;
mod quote;
mod region;

pub use city::{City, CityId, Code};
pub use coordinate::{Coordinate, InvalidCoordinate};
pub use money::Money;
pub use quote::{InvalidTariff, ShippingQuote, Tariff};
pub use region::{InvalidRegionCode, RegionCode};
