//! HTTP client for the cart service.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use super::error::CartError;
use super::{Confirmation, OrderSubmitter};

/// Host the cart service is reached at when none is configured.
pub const DEFAULT_CART_ENDPOINT: &str = "cart";

/// Configuration for the cart client.
#[derive(Debug, Clone)]
pub struct CartClientConfig {
    /// Base URL; the order id is appended to it
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CartClientConfig {
    /// Create a config for a cart service reachable at `endpoint`
    /// (a `host` or `host:port`).
    pub fn new(endpoint: &str) -> Self {
        Self {
            base_url: format!("http://{endpoint}/shipping/"),
            timeout_secs: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for CartClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CART_ENDPOINT)
    }
}

/// Client for the cart service's shipping endpoint.
#[derive(Debug, Clone)]
pub struct CartClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CartClient {
    /// Create a new cart client.
    ///
    /// Fails if the configured base URL cannot have path segments appended.
    pub fn new(config: CartClientConfig) -> Result<Self, CartError> {
        let invalid = |message: String| CartError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message,
        };
        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The base URL orders are posted under.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL for order `id`, with the id as a single percent-encoded segment.
    fn order_url(&self, id: &str) -> Result<Url, CartError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(CartError::InvalidOrderId(id.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CartError::InvalidOrderId(id.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl OrderSubmitter for CartClient {
    async fn submit_order(&self, id: &str, payload: &str) -> Result<Confirmation, CartError> {
        let url = self.order_url(id)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CartError::NotFound);
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(CartError::NotFound);
        }

        Ok(Confirmation { body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        extract::Path,
        http::{StatusCode, Uri},
        routing::post,
    };
    use std::sync::{Arc, Mutex};

    #[test]
    fn config_defaults() {
        let config = CartClientConfig::default();
        assert_eq!(config.base_url, "http://cart/shipping/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_with_endpoint() {
        let config = CartClientConfig::new("cart.internal:8080");
        assert_eq!(config.base_url, "http://cart.internal:8080/shipping/");
    }

    #[test]
    fn config_builders() {
        let config = CartClientConfig::default()
            .with_base_url("http://localhost:9000/shipping/")
            .with_timeout_secs(1);
        assert_eq!(config.base_url, "http://localhost:9000/shipping/");
        assert_eq!(config.timeout_secs, 1);
    }

    /// Serve a stand-in cart service on an ephemeral port.
    async fn spawn_cart() -> String {
        let app = Router::new().route(
            "/shipping/:id",
            post(|Path(id): Path<String>, body: String| async move {
                match id.as_str() {
                    "missing" => (StatusCode::NOT_FOUND, String::new()),
                    "empty" => (StatusCode::OK, String::new()),
                    _ => (StatusCode::OK, format!(r#"{{"id":"{id}","shipping":{body}}}"#)),
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/shipping/")
    }

    fn client(base_url: &str) -> CartClient {
        CartClient::new(CartClientConfig::default().with_base_url(base_url)).unwrap()
    }

    #[tokio::test]
    async fn submit_order_returns_cart_body() {
        let base = spawn_cart().await;

        let confirmation = client(&base)
            .submit_order("abc123", r#"{"cost":23.0}"#)
            .await
            .unwrap();

        assert_eq!(confirmation.body, r#"{"id":"abc123","shipping":{"cost":23.0}}"#);
    }

    #[tokio::test]
    async fn error_status_is_not_found() {
        let base = spawn_cart().await;

        let result = client(&base).submit_order("missing", "{}").await;
        assert!(matches!(result, Err(CartError::NotFound)));
    }

    #[tokio::test]
    async fn empty_body_is_not_found() {
        let base = spawn_cart().await;

        let result = client(&base).submit_order("empty", "{}").await;
        assert!(matches!(result, Err(CartError::NotFound)));
    }

    #[test]
    fn order_url_appends_one_segment() {
        let client = client("http://cart/shipping/");
        assert_eq!(
            client.order_url("abc-123").unwrap().as_str(),
            "http://cart/shipping/abc-123"
        );
        assert_eq!(
            client.order_url("../admin/purge").unwrap().as_str(),
            "http://cart/shipping/..%2Fadmin%2Fpurge"
        );
    }

    #[test]
    fn dot_segments_are_rejected() {
        let client = client("http://cart/shipping/");
        for id in ["", ".", ".."] {
            assert!(matches!(
                client.order_url(id),
                Err(CartError::InvalidOrderId(_))
            ));
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = CartClient::new(CartClientConfig::default().with_base_url("not a url"));
        assert!(matches!(result, Err(CartError::InvalidBaseUrl { .. })));
    }

    /// Serve a cart that accepts any path and records the URIs it sees.
    async fn spawn_recording_cart() -> (String, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let app = Router::new().fallback(move |uri: Uri| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(uri.to_string());
                (StatusCode::OK, "{}".to_string())
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/shipping/"), seen)
    }

    #[tokio::test]
    async fn order_id_stays_inside_shipping_path() {
        let (base, seen) = spawn_recording_cart().await;
        let client = client(&base);

        client.submit_order("../admin/purge", "{}").await.unwrap();
        client.submit_order("abc?delete=all", "{}").await.unwrap();
        client.submit_order("a#frag", "{}").await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "/shipping/..%2Fadmin%2Fpurge",
                "/shipping/abc%3Fdelete=all",
                "/shipping/a%23frag",
            ]
        );
    }

    #[tokio::test]
    async fn unreachable_cart_is_http_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(&format!("http://{addr}/shipping/"))
            .submit_order("abc", "{}")
            .await;
        assert!(matches!(result, Err(CartError::Http(_))));
    }
}
