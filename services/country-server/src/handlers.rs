//! Gateway request handlers

use axum::extract::State;
use axum::Json;
use country_soap::CountryClient;
use serde::Serialize;

use crate::error::ApiError;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub client: CountryClient,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    soap_endpoint: String,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        soap_endpoint: state.client.endpoint().to_string(),
    })
}

/// Population lookup endpoint
///
/// Takes the country name as the raw request body and answers with the
/// population as a decimal integer. Adapter faults map to HTTP statuses
/// in [`ApiError`].
pub async fn get_population(
    State(state): State<AppState>,
    country: String,
) -> Result<String, ApiError> {
    let response = state.client.get_country(&country).await?;

    tracing::debug!(
        country = %response.country.name,
        population = response.country.population,
        "Lookup succeeded"
    );

    Ok(response.country.population.to_string())
}
