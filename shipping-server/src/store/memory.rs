//! In-memory city store loaded from a JSON file.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::{City, CityId, Code, RegionCode};

use super::CityStore;
use super::error::StoreError;
use super::record::ReferenceData;

/// City store that keeps all reference data in memory.
///
/// The data is immutable after loading, so the store can be shared between
/// request handlers without locking.
#[derive(Debug, Default)]
pub struct InMemoryCityStore {
    cities: HashMap<CityId, City>,
    /// City ids per region, ordered by city name.
    by_code: HashMap<RegionCode, Vec<CityId>>,
    /// Ordered by country name.
    codes: Vec<Code>,
}

impl InMemoryCityStore {
    /// Build a store from parsed reference data.
    ///
    /// Every record is validated; the first invalid or duplicate record
    /// aborts the load.
    pub fn from_data(data: ReferenceData) -> Result<Self, StoreError> {
        let mut cities = HashMap::with_capacity(data.cities.len());
        for record in data.cities {
            let city = record.into_city()?;
            let id = city.id;
            if cities.insert(id, city).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }

        let by_code = build_index(&cities);

        let mut seen = HashSet::with_capacity(data.codes.len());
        let mut codes = Vec::with_capacity(data.codes.len());
        for record in data.codes {
            let code = record.into_code()?;
            if !seen.insert(code.code.clone()) {
                return Err(StoreError::DuplicateCode(code.code));
            }
            codes.push(code);
        }
        codes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));

        Ok(Self {
            cities,
            by_code,
            codes,
        })
    }

    /// Parse reference data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let data: ReferenceData = serde_json::from_str(json).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })?;
        Self::from_data(data)
    }

    /// Load reference data from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of cities held.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Check if the store holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn cities_in(&self, code: &RegionCode) -> impl Iterator<Item = &City> {
        self.by_code
            .get(code)
            .into_iter()
            .flatten()
            .filter_map(|id| self.cities.get(id))
    }
}

/// Group city ids by region, each group sorted by name then id.
fn build_index(cities: &HashMap<CityId, City>) -> HashMap<RegionCode, Vec<CityId>> {
    let mut by_code: HashMap<RegionCode, Vec<&City>> = HashMap::new();
    for city in cities.values() {
        by_code.entry(city.code.clone()).or_default().push(city);
    }

    by_code
        .into_iter()
        .map(|(code, mut group)| {
            group.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            (code, group.into_iter().map(|c| c.id).collect())
        })
        .collect()
}

impl CityStore for InMemoryCityStore {
    fn find_by_id(&self, id: CityId) -> Result<Option<City>, StoreError> {
        Ok(self.cities.get(&id).cloned())
    }

    fn find_by_code(&self, code: &RegionCode) -> Result<Vec<City>, StoreError> {
        Ok(self.cities_in(code).cloned().collect())
    }

    fn match_cities(&self, code: &RegionCode, text: &str) -> Result<Vec<City>, StoreError> {
        let prefix = text.to_lowercase();
        Ok(self
            .cities_in(code)
            .filter(|c| c.name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    fn codes(&self) -> Result<Vec<Code>, StoreError> {
        Ok(self.codes.clone())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.cities.len())
    }
}
