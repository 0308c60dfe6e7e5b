//! City search over the reference store.
//!
//! Validates free-text searches, delegates matching to a
//! [`CityStore`](crate::store::CityStore) and bounds the result size.
//! Also exposes the plain lookups (by id, by region) the quote flow needs.

mod bounded;
mod config;

pub use bounded::{CitySearch, SearchError, SearchQuery};
pub use config::SearchConfig;
