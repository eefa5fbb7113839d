//! # Country SOAP Transport
//!
//! SOAP transport layer for the country lookup service.
//!
//! This crate provides:
//! - SOAP 1.1 envelope serialization for `getCountryRequest`
//! - Namespace-prefix-agnostic unmarshalling of `getCountryResponse`
//! - A reqwest-based client adapter for the lookup operation
//! - Endpoint configuration from environment variables
//!
//! ## Client Example
//!
//! ```ignore
//! use country_soap::{CountryClient, Marshaller, SoapConfig};
//!
//! let client = CountryClient::new(SoapConfig::from_env(), Marshaller::new());
//! let response = client.get_country("Spain").await?;
//! println!("{}", response.country.population);
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod marshal;

pub use client::CountryClient;
pub use config::{SoapConfig, DEFAULT_ENDPOINT, DEFAULT_SOAP_ACTION};
pub use envelope::{SOAP_ENV_NS, TARGET_NS};
pub use error::SoapError;
pub use marshal::Marshaller;
