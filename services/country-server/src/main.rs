//! Country Population Gateway server
//!
//! Forwards country names to the configured SOAP lookup service and
//! returns the population as a plain-text integer.
//!
//! Usage:
//!   # Defaults (SOAP endpoint at http://localhost:8080/ws)
//!   cargo run --package country-server
//!
//!   # Custom endpoint
//!   COUNTRY_WS_URL=http://countries.internal/ws cargo run --package country-server

use std::net::SocketAddr;

use country_server::{app, AppState};
use country_soap::{CountryClient, Marshaller, SoapConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "country_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SoapConfig::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        timeout_ms = config.timeout.as_millis() as u64,
        "Forwarding lookups to SOAP endpoint"
    );

    // One marshaller and one client for the process lifetime
    let client = CountryClient::new(config, Marshaller::new());
    let app = app(AppState { client });

    let addr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|v| v.parse::<SocketAddr>().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    tracing::info!("Country gateway listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
