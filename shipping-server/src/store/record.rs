//! On-disk representation of the reference data.

use serde::{Deserialize, Serialize};

use crate::domain::{City, CityId, Code, Coordinate, RegionCode};

use super::error::StoreError;

/// Top-level reference data document.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReferenceData {
    /// Countries cities can be scoped to.
    #[serde(default)]
    pub codes: Vec<CodeRecord>,

    /// All known cities.
    #[serde(default)]
    pub cities: Vec<CityRecord>,
}

/// Country record as stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeRecord {
    pub code: String,
    pub name: String,
}

/// City record as stored, with flat coordinates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityRecord {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Validate the record and convert it to a domain city.
    pub fn into_city(self) -> Result<City, StoreError> {
        let id = CityId(self.id);
        let invalid = |message: String| StoreError::InvalidRecord { id, message };

        let code = RegionCode::parse(&self.code).map_err(|e| invalid(e.to_string()))?;
        let coordinate =
            Coordinate::new(self.latitude, self.longitude).map_err(|e| invalid(e.to_string()))?;

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }

        Ok(City {
            id,
            code,
            name: self.name,
            region: self.region.filter(|r| !r.trim().is_empty()),
            coordinate,
        })
    }
}

impl CodeRecord {
    /// Validate the record and convert it to a domain code.
    pub fn into_code(self) -> Result<Code, StoreError> {
        let code = RegionCode::parse(&self.code).map_err(|e| StoreError::InvalidCode {
            code: self.code.clone(),
            message: e.to_string(),
        })?;
        Ok(Code {
            code,
            name: self.name,
        })
    }
}
