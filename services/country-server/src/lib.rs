//! # Country Population Gateway
//!
//! HTTP service that forwards a country name to the SOAP lookup service
//! and exposes the population figure as a plain-text integer.
//!
//! The router is built here so integration tests can run the exact
//! service the binary serves.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Build the gateway router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/countries", post(handlers::get_population))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
