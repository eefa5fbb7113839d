//! Error types for the country data model

use thiserror::Error;

/// Errors raised while mapping wire values onto the contract types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    #[error("Unknown currency code: '{0}'. Expected one of GBP, EUR, PLN")]
    Unknown(String),
}
