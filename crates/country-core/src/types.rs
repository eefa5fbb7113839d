//! Country Lookup Types
//!
//! This module contains the request/response types defined by the country
//! lookup WSDL contract. The original contract ships generated bindings;
//! these are hand-written equivalents kept as plain immutable data.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CurrencyCodeError;

/// Request payload for the `getCountry` operation
///
/// Created per call and discarded once the call completes. The name is
/// forwarded as-is; the remote service owns validation of unknown or
/// empty country names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryRequest {
    pub name: String,
}

impl CountryRequest {
    /// Create a request for the given country name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response payload for the `getCountry` operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryResponse {
    pub country: Country,
}

/// Country value object returned by the lookup service
///
/// Read-only after unmarshalling. `population` is unsigned so the
/// contract's non-negativity invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub population: u64,
    pub capital: String,
    pub currency: CurrencyCode,
}

/// Currency codes enumerated by the WSDL contract
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "PLN")]
    Pln,
}

impl CurrencyCode {
    /// The wire representation defined by the contract
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Pln => "PLN",
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GBP" => Ok(CurrencyCode::Gbp),
            "EUR" => Ok(CurrencyCode::Eur),
            "PLN" => Ok(CurrencyCode::Pln),
            other => Err(CurrencyCodeError::Unknown(other.to_string())),
        }
    }
}
