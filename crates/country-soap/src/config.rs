//! Endpoint configuration for the SOAP client
//!
//! The reference deployment hardcodes the endpoint and SOAP action; here
//! both are environment variables with the reference values as defaults,
//! and the transport timeout is explicit instead of inherited.

use std::time::Duration;

/// Default SOAP endpoint URL
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/ws";

/// Default SOAP action identifying the `getCountry` operation
pub const DEFAULT_SOAP_ACTION: &str = "http://local/gs-producing-web-service/GetCountryRequest";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the outbound SOAP call
#[derive(Debug, Clone)]
pub struct SoapConfig {
    /// URL the SOAP envelope is POSTed to
    pub endpoint: String,
    /// Value of the `SOAPAction` header
    pub soap_action: String,
    /// Timeout applied to the whole outbound call
    pub timeout: Duration,
}

impl SoapConfig {
    /// Create a config for the given endpoint with default action and timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Read the config from the environment
    ///
    /// Recognized variables: `COUNTRY_WS_URL`, `COUNTRY_WS_SOAP_ACTION`,
    /// `COUNTRY_WS_TIMEOUT_MS`. Missing or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("COUNTRY_WS_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let soap_action = std::env::var("COUNTRY_WS_SOAP_ACTION")
            .unwrap_or_else(|_| DEFAULT_SOAP_ACTION.to_string());
        let timeout_ms = std::env::var("COUNTRY_WS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            endpoint,
            soap_action,
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Default for SoapConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            soap_action: DEFAULT_SOAP_ACTION.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
