//! Application state for the web layer.

use std::sync::Arc;

use crate::cart::OrderSubmitter;
use crate::shipping::ShippingService;
use crate::store::CityStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// City lookups and quotes
    pub shipping: Arc<ShippingService<dyn CityStore>>,

    /// Where confirmed orders are forwarded
    pub cart: Arc<dyn OrderSubmitter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(shipping: ShippingService<dyn CityStore>, cart: Arc<dyn OrderSubmitter>) -> Self {
        Self {
            shipping: Arc::new(shipping),
            cart,
        }
    }
}
