//! Order confirmation against the cart service.
//!
//! Confirming a shipment is a plain hand-off: the request body is forwarded
//! to the cart service and its answer is returned verbatim.

mod client;
mod error;

pub use client::{CartClient, CartClientConfig, DEFAULT_CART_ENDPOINT};
pub use error::CartError;

use async_trait::async_trait;

/// The cart service's answer to a confirmed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Raw JSON body returned by the cart
    pub body: String,
}

/// Something orders can be submitted to.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Submit the shipping details for order `id`.
    async fn submit_order(&self, id: &str, payload: &str) -> Result<Confirmation, CartError>;
}
