use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shipping_server::cart::CartClient;
use shipping_server::config::ServerConfig;
use shipping_server::quote::QuoteConfig;
use shipping_server::search::{CitySearch, SearchConfig};
use shipping_server::shipping::ShippingService;
use shipping_server::store::{CityStore, InMemoryCityStore};
use shipping_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "shipping_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Load reference data (fail fast if unavailable)
    info!(path = %config.city_data.display(), "loading cities");
    let store = InMemoryCityStore::load(&config.city_data)?;
    info!(cities = store.len(), "loaded cities");
    let store: Arc<dyn CityStore> = Arc::new(store);

    let search = CitySearch::new(store, SearchConfig::default());
    let shipping = ShippingService::new(search, QuoteConfig::default());

    info!(cart = %config.cart.base_url, "cart endpoint");
    let cart = CartClient::new(config.cart)?;

    let state = AppState::new(shipping, Arc::new(cart));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "shipping service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
