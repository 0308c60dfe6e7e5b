//! Cart client error types.

/// Errors that can occur when confirming an order with the cart service.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL is unusable
    #[error("invalid cart URL {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The order id cannot be used as a URL path segment
    #[error("invalid order id {0:?}")]
    InvalidOrderId(String),

    /// The cart service rejected the order or returned nothing
    #[error("cart not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(CartError::NotFound.to_string(), "cart not found");
        assert_eq!(
            CartError::InvalidOrderId("..".into()).to_string(),
            "invalid order id \"..\""
        );
    }
}
