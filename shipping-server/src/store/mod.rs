//! City reference data.
//!
//! The rest of the crate only sees the [`CityStore`] trait, so the backing
//! store can be swapped (in-memory file, database, remote service) without
//! touching the search or quote logic.

mod error;
mod memory;
mod record;

pub use error::StoreError;
pub use memory::InMemoryCityStore;
pub use record::{CityRecord, CodeRecord, ReferenceData};

use crate::domain::{City, CityId, Code, RegionCode};

/// Read-only access to city and country reference data.
///
/// Implementations own the matching semantics of [`match_cities`]; callers
/// rely only on the returned order being stable.
///
/// [`match_cities`]: CityStore::match_cities
pub trait CityStore: Send + Sync {
    /// Look up a city by id. `Ok(None)` means no such city.
    fn find_by_id(&self, id: CityId) -> Result<Option<City>, StoreError>;

    /// All cities in a region.
    fn find_by_code(&self, code: &RegionCode) -> Result<Vec<City>, StoreError>;

    /// Cities in a region whose names match a text fragment.
    fn match_cities(&self, code: &RegionCode, text: &str) -> Result<Vec<City>, StoreError>;

    /// All known regions, ordered by name.
    fn codes(&self) -> Result<Vec<Code>, StoreError>;

    /// Number of cities held.
    fn count(&self) -> Result<usize, StoreError>;
}
