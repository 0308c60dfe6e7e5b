//! Validated, size-bounded city search.
//!
//! Text matching itself is the store's job. This layer rejects queries that
//! are too short to be useful, scopes them to a well-formed region code and
//! caps the number of results handed back.

use std::sync::Arc;

use crate::domain::{City, CityId, Code, RegionCode};
use crate::store::{CityStore, StoreError};

use super::config::SearchConfig;

/// Error from a city lookup.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request failed validation; the store was not consulted
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No city with the requested id
    #[error("city {0} not found")]
    NotFound(CityId),

    /// The store failed to answer
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A free-text search scoped to one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Region code as supplied by the caller.
    pub code: String,

    /// Text fragment to match city names against.
    pub text: String,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }

    /// Validate the query, returning the parsed region code.
    ///
    /// The text length is counted in characters exactly as given; it is
    /// not trimmed. Characters are Unicode scalar values, not UTF-16 units,
    /// so a single emoji counts once.
    pub fn validate(&self, config: &SearchConfig) -> Result<RegionCode, SearchError> {
        let chars = self.text.chars().count();
        if chars < config.min_text_chars {
            return Err(SearchError::InvalidQuery(format!(
                "search text must be at least {} characters, got {}",
                config.min_text_chars, chars
            )));
        }

        parse_code(&self.code)
    }
}

fn parse_code(code: &str) -> Result<RegionCode, SearchError> {
    RegionCode::parse(code).map_err(|e| SearchError::InvalidQuery(e.to_string()))
}

/// City lookups over a [`CityStore`].
///
/// Stateless apart from the shared, read-only store, so one instance can
/// serve concurrent requests.
pub struct CitySearch<S: ?Sized> {
    store: Arc<S>,
    config: SearchConfig,
}

impl<S: ?Sized> Clone for CitySearch<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: CityStore + ?Sized> CitySearch<S> {
    /// Create a search over the given store.
    pub fn new(store: Arc<S>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search a region for cities matching `text`.
    ///
    /// Returns at most `max_results` cities, keeping the store's order.
    pub fn search(&self, code: &str, text: &str) -> Result<Vec<City>, SearchError> {
        self.search_query(&SearchQuery::new(code, text))
    }

    /// Run a prepared [`SearchQuery`].
    pub fn search_query(&self, query: &SearchQuery) -> Result<Vec<City>, SearchError> {
        let code = query.validate(&self.config)?;

        let mut cities = self.store.match_cities(&code, &query.text)?;
        cities.truncate(self.config.max_results);

        Ok(cities)
    }

    /// All cities in a region, in store order.
    pub fn exact_by_code(&self, code: &str) -> Result<Vec<City>, SearchError> {
        let code = parse_code(code)?;
        Ok(self.store.find_by_code(&code)?)
    }

    /// Look up a single city.
    pub fn resolve_by_id(&self, id: CityId) -> Result<City, SearchError> {
        self.store
            .find_by_id(id)?
            .ok_or(SearchError::NotFound(id))
    }

    /// All known regions, ordered by name.
    pub fn codes(&self) -> Result<Vec<Code>, SearchError> {
        Ok(self.store.codes()?)
    }

    /// Number of cities in the store.
    pub fn count(&self) -> Result<usize, SearchError> {
        Ok(self.store.count()?)
    }
}

#[cfg(test)]
#[path = "bounded_tests.rs"]
mod bounded_tests;
