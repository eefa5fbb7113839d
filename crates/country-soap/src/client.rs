//! Reqwest-based client adapter for the country lookup operation

use country_core::{CountryRequest, CountryResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::SoapConfig;
use crate::error::SoapError;
use crate::marshal::Marshaller;

/// SOAP client adapter for the country lookup service
///
/// Stateless between calls: it holds only the endpoint configuration, the
/// shared marshaller and a pooled HTTP client, so one instance can be
/// cloned and shared across concurrent requests.
///
/// # Example
///
/// ```ignore
/// use country_soap::{CountryClient, Marshaller, SoapConfig};
///
/// let client = CountryClient::new(SoapConfig::from_env(), Marshaller::new());
/// let response = client.get_country("Spain").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CountryClient {
    http: Client,
    config: SoapConfig,
    marshaller: Marshaller,
}

impl CountryClient {
    /// Create a client with the given config and marshalling configuration
    pub fn new(config: SoapConfig, marshaller: Marshaller) -> Self {
        Self {
            http: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap(),
            config,
            marshaller,
        }
    }

    /// Create a client backed by a custom reqwest client
    ///
    /// The caller owns the timeout settings in this case.
    pub fn with_client(http: Client, config: SoapConfig, marshaller: Marshaller) -> Self {
        Self {
            http,
            config,
            marshaller,
        }
    }

    /// The endpoint URL envelopes are POSTed to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Look up a country by name
    ///
    /// Serializes a `getCountryRequest`, POSTs it to the configured
    /// endpoint with the `SOAPAction` header, blocks until the response
    /// arrives and unmarshals the body. The name is forwarded as-is;
    /// empty or unknown names are the remote service's problem.
    pub async fn get_country(&self, country: &str) -> Result<CountryResponse, SoapError> {
        let request = CountryRequest::new(country);
        let body = self.marshaller.marshal_request(&request)?;

        tracing::info!(country = %country, "Requested country");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", self.config.soap_action))
            .body(body)
            .send()
            .await
            .map_err(SoapError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(SoapError::Transport)?;

        // SOAP faults usually arrive with a 500 status; the fault in the
        // body is the more precise signal, so try to decode it first.
        match self.marshaller.unmarshal_response(&text) {
            Ok(parsed) if status.is_success() => Ok(parsed),
            Ok(_) => Err(SoapError::UnexpectedStatus(status.as_u16())),
            Err(fault @ SoapError::RemoteFault { .. }) => Err(fault),
            Err(_) if !status.is_success() => Err(SoapError::UnexpectedStatus(status.as_u16())),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CountryClient::new(SoapConfig::default(), Marshaller::new());
        assert_eq!(client.endpoint(), "http://localhost:8080/ws");
    }

    #[test]
    fn test_custom_endpoint() {
        let client = CountryClient::new(
            SoapConfig::new("http://countries.internal/ws"),
            Marshaller::new(),
        );
        assert_eq!(client.endpoint(), "http://countries.internal/ws");
    }
}
