//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cart::{CartClientConfig, DEFAULT_CART_ENDPOINT};

/// Address the server binds when `SHIPPING_ADDR` is unset.
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Reference data file used when `CITY_DATA` is unset: the file bundled
/// with this crate, so the default works from any working directory.
const DEFAULT_CITY_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/cities.json");

/// Error building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the shipping server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Path of the city reference data file
    pub city_data: PathBuf,

    /// Cart service connection
    pub cart: CartClientConfig,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    ///
    /// - `SHIPPING_ADDR`: listen address (default `0.0.0.0:8080`)
    /// - `CITY_DATA`: reference data file (default: the bundled `data/cities.json`)
    /// - `CART_ENDPOINT`: cart host (default `cart`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_str = lookup("SHIPPING_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_str.parse().map_err(|_| ConfigError::Invalid {
            var: "SHIPPING_ADDR",
            value: addr_str.clone(),
        })?;

        let city_data = lookup("CITY_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CITY_DATA));

        let endpoint = lookup("CART_ENDPOINT").unwrap_or_else(|| DEFAULT_CART_ENDPOINT.to_string());

        Ok(Self {
            addr,
            city_data,
            cart: CartClientConfig::new(&endpoint),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(config.city_data.is_absolute());
        assert!(config.city_data.ends_with("data/cities.json"));
        assert!(config.city_data.exists());
        assert_eq!(config.cart.base_url, "http://cart/shipping/");
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SHIPPING_ADDR", "127.0.0.1:9090"),
            ("CITY_DATA", "/srv/cities.json"),
            ("CART_ENDPOINT", "cart.svc:8080"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.city_data, PathBuf::from("/srv/cities.json"));
        assert_eq!(config.cart.base_url, "http://cart.svc:8080/shipping/");
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("SHIPPING_ADDR", "nope")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "SHIPPING_ADDR",
                value: "nope".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid SHIPPING_ADDR: \"nope\"");
    }
}
