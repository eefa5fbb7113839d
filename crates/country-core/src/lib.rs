//! # Country Core
//!
//! Data model for the country lookup SOAP contract.
//!
//! This crate provides:
//! - Hand-written equivalents of the WSDL-generated request/response types
//! - The `CurrencyCode` enumeration defined by the contract
//! - The core error type
//!
//! ## Example
//!
//! ```rust
//! use country_core::CountryRequest;
//!
//! let request = CountryRequest::new("Spain");
//! assert_eq!(request.name, "Spain");
//! ```

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::*;
pub use types::*;
