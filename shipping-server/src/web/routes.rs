//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::cart::CartError;
use crate::domain::CityId;
use crate::search::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/count", get(count))
        .route("/codes", get(codes))
        .route("/cities/:code", get(cities))
        .route("/match/:code/:text", get(match_cities))
        .route("/calc/:id", get(calc))
        .route("/confirm/:id", post(confirm))
        .route("/dispatch/:orderid", post(dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Number of cities in the store.
async fn count(State(state): State<AppState>) -> Result<String, AppError> {
    let count = state.shipping.search().count()?;
    Ok(count.to_string())
}

/// All countries, ordered by name.
async fn codes(State(state): State<AppState>) -> Result<Json<Vec<CodeResult>>, AppError> {
    info!("all codes");

    let codes = state.shipping.search().codes()?;
    Ok(Json(codes.iter().map(CodeResult::from_code).collect()))
}

/// All cities in a country.
async fn cities(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<CityResult>>, AppError> {
    info!(%code, "cities by code");

    let cities = state.shipping.search().exact_by_code(&code)?;
    Ok(Json(cities.iter().map(CityResult::from_city).collect()))
}

/// Cities in a country whose names match a text fragment.
async fn match_cities(
    State(state): State<AppState>,
    Path((code, text)): Path<(String, String)>,
) -> Result<Json<Vec<CityResult>>, AppError> {
    info!(%code, %text, "match");

    let cities = state.shipping.search().search(&code, &text)?;
    Ok(Json(cities.iter().map(CityResult::from_city).collect()))
}

/// Shipping distance and cost to a city.
async fn calc(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ShipResponse>, AppError> {
    info!(id, "calculation");

    let quote = state.shipping.quote(CityId(id))?;
    info!(
        distance_km = quote.distance_km(),
        cost = %quote.cost(),
        "shipping"
    );

    Ok(Json(ShipResponse::from_quote(&quote)))
}

/// Forward shipping details for an order to the cart service.
///
/// Only JSON bodies are accepted.
async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    info!(%id, "confirm");

    if !is_json(&headers) {
        return Err(AppError::UnsupportedMediaType {
            message: "expected Content-Type: application/json".to_string(),
        });
    }

    let confirmation = state.cart.submit_order(&id, &body).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        confirmation.body,
    )
        .into_response())
}

/// Check for an `application/json` (or `+json`) content type, ignoring parameters.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Mark an order as dispatched.
async fn dispatch(Path(order_id): Path<String>, body: String) -> Json<DispatchResponse> {
    info!(%order_id, "dispatch");

    Json(DispatchResponse {
        order_id,
        status: "SHIPPED".to_string(),
        response_code: "200".to_string(),
        message: "Order dispatched successfully".to_string(),
        payload: (!body.is_empty()).then_some(body),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    UnsupportedMediaType { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidQuery(message) => AppError::BadRequest { message },
            SearchError::NotFound(_) => AppError::NotFound {
                message: "city not found".to_string(),
            },
            SearchError::Store(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<CartError> for AppError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound => AppError::NotFound {
                message: e.to_string(),
            },
            CartError::InvalidOrderId(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            CartError::Http(_) | CartError::InvalidBaseUrl { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::UnsupportedMediaType { message } => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
