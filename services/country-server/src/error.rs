//! HTTP error mapping for the gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use country_soap::SoapError;
use serde::Serialize;
use thiserror::Error;

/// Gateway errors surfaced to HTTP clients
///
/// # Status Code Mapping
///
/// - transport failure -> 502 Bad Gateway
/// - unexpected upstream HTTP status -> 502 Bad Gateway
/// - remote SOAP fault -> 502 Bad Gateway
/// - marshalling failure -> 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Soap(#[from] SoapError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Soap(err) = self;

        let (status, error_type) = match &err {
            SoapError::Transport(_) => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
            SoapError::UnexpectedStatus(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_STATUS"),
            SoapError::RemoteFault { .. } => (StatusCode::BAD_GATEWAY, "REMOTE_FAULT"),
            SoapError::Marshalling(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MARSHALLING_ERROR")
            }
        };

        tracing::warn!(error = %err, "Lookup failed");

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: err.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
