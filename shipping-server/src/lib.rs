//! Shipping quote server.
//!
//! Quotes the distance and cost of shipping from the warehouse to a known
//! city, and offers a bounded search over the city reference data.

pub mod cart;
pub mod config;
pub mod domain;
pub mod quote;
pub mod search;
pub mod shipping;
pub mod store;
pub mod web;
