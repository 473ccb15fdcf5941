//! # Request Handlers
//!
//! Axum request handlers for the storefront API.
//! Success bodies are compact JSON followed by a newline.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use store_core::{Payment, StoreError};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

/// Rejection returned by every handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn store_error_to_response(err: StoreError) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

/// Encode `value` as JSON terminated by a newline
fn json_line<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let mut body = serde_json::to_vec(value).map_err(|e| {
        error!("Failed to encode response: {}", e);
        store_error_to_response(StoreError::Serialization(e.to_string()))
    })?;
    body.push(b'\n');

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> Result<Response, ApiError> {
    json_line(&serde_json::json!({
        "status": "healthy",
        "service": "storefront",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the product catalog
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_line(state.catalog.as_ref())
}

/// Validate a payment and echo it back
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn create_payment(body: Bytes) -> Result<Response, ApiError> {
    let payment = Payment::from_json(&body).map_err(|e| {
        warn!("Rejected payment: {}", e);
        store_error_to_response(e)
    })?;

    info!(
        id = %payment.id,
        amount = %payment.amount,
        card = %payment.masked_card(),
        "Payment accepted"
    );

    json_line(&payment)
}

/// Fallback for a known path requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    warn!("Method {} not allowed on {}", method, uri.path());
    store_error_to_response(StoreError::MethodNotAllowed {
        method: method.to_string(),
    })
}

/// Fallback for paths with no route
pub async fn not_found(uri: Uri) -> ApiError {
    store_error_to_response(StoreError::NotFound {
        path: uri.path().to_string(),
    })
}
