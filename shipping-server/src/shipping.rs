//! Shipping quotes for stored cities.
//!
//! Joins the two halves of the service: the city is resolved through
//! [`CitySearch`], then priced from the warehouse with [`QuoteConfig`].

use crate::domain::{City, CityId, ShippingQuote};
use crate::quote::QuoteConfig;
use crate::search::{CitySearch, SearchError};
use crate::store::CityStore;

/// Quotes shipping to cities known to the store.
pub struct ShippingService<S: ?Sized> {
    search: CitySearch<S>,
    quote: QuoteConfig,
}

impl<S: ?Sized> Clone for ShippingService<S> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            quote: self.quote.clone(),
        }
    }
}

impl<S: CityStore + ?Sized> ShippingService<S> {
    /// Create a new shipping service.
    pub fn new(search: CitySearch<S>, quote: QuoteConfig) -> Self {
        Self { search, quote }
    }

    /// The underlying city search.
    pub fn search(&self) -> &CitySearch<S> {
        &self.search
    }

    /// The quote configuration.
    pub fn quote_config(&self) -> &QuoteConfig {
        &self.quote
    }

    /// Quote shipping to the city with the given id.
    ///
    /// Fails with [`SearchError::NotFound`] if the store has no such city.
    pub fn quote(&self, id: CityId) -> Result<ShippingQuote, SearchError> {
        self.quote_for_city(id).map(|(_, quote)| quote)
    }

    /// Like [`quote`](Self::quote), but also returns the resolved city.
    pub fn quote_for_city(&self, id: CityId) -> Result<(City, ShippingQuote), SearchError> {
        let city = self.search.resolve_by_id(id)?;
        let quote = self.quote.quote_to(&city.coordinate);
        Ok((city, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tariff;
    use crate::search::SearchConfig;
    use crate::store::InMemoryCityStore;
    use std::sync::Arc;

    const DATA: &str = r#"{"cities": [
        {"id": 1, "code": "de", "name": "Berlin", "latitude": 52.520008, "longitude": 13.404954},
        {"id": 2, "code": "de", "name": "Solingen", "latitude": 51.164896, "longitude": 7.068792}
    ]}"#;

    fn service() -> ShippingService<InMemoryCityStore> {
        let store = Arc::new(InMemoryCityStore::from_json_str(DATA).unwrap());
        let search = CitySearch::new(store, SearchConfig::default());
        ShippingService::new(search, QuoteConfig::default())
    }

    #[test]
    fn quote_berlin() {
        let quote = service().quote(CityId(1)).unwrap();

        assert_eq!(quote.distance_km(), 460);
        assert_eq!(quote.cost().to_string(), "23.00");
    }

    #[test]
    fn quote_warehouse_city_is_free() {
        let quote = service().quote(CityId(2)).unwrap();

        assert_eq!(quote.distance_km(), 0);
        assert_eq!(quote.cost().cents(), 0);
    }

    #[test]
    fn unknown_city_is_not_found() {
        let result = service().quote(CityId(999_999));
        assert!(matches!(result, Err(SearchError::NotFound(CityId(999_999)))));
    }

    #[test]
    fn quote_for_city_returns_city() {
        let (city, quote) = service().quote_for_city(CityId(1)).unwrap();
        assert_eq!(city.name, "Berlin");
        assert_eq!(quote.distance_km(), 460);
    }

    #[test]
    fn uses_configured_tariff() {
        let store = Arc::new(InMemoryCityStore::from_json_str(DATA).unwrap());
        let search = CitySearch::new(store, SearchConfig::default());
        let config = QuoteConfig::default().with_tariff(Tariff::new(1.0).unwrap());
        let service = ShippingService::new(search, config);

        assert_eq!(service.quote(CityId(1)).unwrap().cost().to_string(), "4.60");
    }
}
