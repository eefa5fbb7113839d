//! SOAP 1.1 request envelope
//!
//! The serializer writes fixed `soapenv`/`gs` prefixes; the remote server
//! is free to answer with whatever prefixes it likes, which is why
//! unmarshalling lives in `marshal` and matches local names only.

use serde::Serialize;

/// SOAP 1.1 envelope namespace
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target namespace of the country lookup WSDL contract
pub const TARGET_NS: &str = "http://local/gs-producing-web-service";

#[derive(Debug, Serialize)]
#[serde(rename = "soapenv:Envelope")]
pub(crate) struct RequestEnvelope<'a> {
    #[serde(rename = "@xmlns:soapenv")]
    pub soapenv_ns: &'a str,
    #[serde(rename = "@xmlns:gs")]
    pub target_ns: &'a str,
    #[serde(rename = "soapenv:Body")]
    pub body: RequestBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestBody<'a> {
    #[serde(rename = "gs:getCountryRequest")]
    pub request: GetCountryRequestXml<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCountryRequestXml<'a> {
    #[serde(rename = "gs:name")]
    pub name: &'a str,
}
