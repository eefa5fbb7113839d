//! Error taxonomy for SOAP operations
//!
//! Faults fall into three kinds, mirroring how the lookup can go wrong:
//! the network (transport), the XML mapping (marshalling), or the remote
//! service itself (SOAP fault). None of them are retried locally.

use thiserror::Error;

/// Errors raised by the SOAP client adapter
#[derive(Debug, Error)]
pub enum SoapError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0} from SOAP endpoint")]
    UnexpectedStatus(u16),

    #[error("Marshalling error: {0}")]
    Marshalling(String),

    #[error("Remote SOAP fault ({code}): {message}")]
    RemoteFault { code: String, message: String },
}
