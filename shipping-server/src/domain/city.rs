//! City and country reference records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, RegionCode};

/// Identifier of a city, assigned by the city store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u64);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A destination city.
///
/// Cities are owned by the store; the rest of the crate treats them as
/// read-only values.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Store-assigned identifier
    pub id: CityId,

    /// Country the city belongs to
    pub code: RegionCode,

    /// Display name (e.g. "Berlin")
    pub name: String,

    /// Administrative region within the country, if known
    pub region: Option<String>,

    /// Location of the city centre
    pub coordinate: Coordinate,
}

/// A country that cities can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Region code (e.g. `de`)
    pub code: RegionCode,

    /// Human-readable country name (e.g. "Germany")
    pub name: String,
}
