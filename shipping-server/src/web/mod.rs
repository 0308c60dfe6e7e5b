//! Web layer for the shipping service.
//!
//! Maps the city search and quote operations onto HTTP endpoints and turns
//! their errors into status codes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
