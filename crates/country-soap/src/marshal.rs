//! Marshaller/unmarshaller for the country lookup contract
//!
//! One `Marshaller` instance binds the WSDL target namespace to the typed
//! request/response structs. It is built once at startup, holds no mutable
//! state, and is shared by every call the client adapter makes.
//!
//! Requests are serialized with the serde serializer from `quick-xml`.
//! Responses are read with the event reader and matched on local element
//! names, so `SOAP-ENV:`, `soapenv:` or `ns2:` prefixes all decode the
//! same way.

use country_core::{Country, CountryRequest, CountryResponse, CurrencyCode};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::envelope::{GetCountryRequestXml, RequestBody, RequestEnvelope, SOAP_ENV_NS, TARGET_NS};
use crate::error::SoapError;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Long-lived marshalling configuration for the country lookup contract
///
/// Acts as both marshaller and unmarshaller, like the single JAXB context
/// the contract was originally consumed with.
#[derive(Debug, Clone)]
pub struct Marshaller {
    target_namespace: String,
}

impl Marshaller {
    /// Create a marshaller bound to the contract's target namespace
    pub fn new() -> Self {
        Self {
            target_namespace: TARGET_NS.to_string(),
        }
    }

    /// Create a marshaller bound to a custom target namespace
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            target_namespace: namespace.into(),
        }
    }

    /// The namespace requests are serialized under
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Serialize a `getCountryRequest` into a SOAP 1.1 envelope
    pub fn marshal_request(&self, request: &CountryRequest) -> Result<String, SoapError> {
        let envelope = RequestEnvelope {
            soapenv_ns: SOAP_ENV_NS,
            target_ns: &self.target_namespace,
            body: RequestBody {
                request: GetCountryRequestXml {
                    name: &request.name,
                },
            },
        };

        let xml = quick_xml::se::to_string(&envelope)
            .map_err(|e| SoapError::Marshalling(e.to_string()))?;

        Ok(format!("{XML_DECL}{xml}"))
    }

    /// Deserialize a SOAP response body into a `CountryResponse`
    ///
    /// A body carrying a SOAP `Fault` element yields
    /// [`SoapError::RemoteFault`]; anything that prevents building a
    /// complete `Country` yields [`SoapError::Marshalling`].
    pub fn unmarshal_response(&self, xml: &str) -> Result<CountryResponse, SoapError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Path of local element names from the root down to the cursor
        let mut path: Vec<String> = Vec::new();

        let mut name: Option<String> = None;
        let mut population: Option<String> = None;
        let mut capital: Option<String> = None;
        let mut currency: Option<String> = None;

        let mut saw_fault = false;
        let mut fault_code: Option<String> = None;
        let mut fault_string: Option<String> = None;

        loop {
            match reader.read_event() {
                Err(e) => return Err(SoapError::Marshalling(format!("invalid XML: {e}"))),
                Ok(Event::Eof) => break,
                Ok(Event::Start(start)) => {
                    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                    if local == "Fault" {
                        saw_fault = true;
                    }
                    path.push(local);
                }
                Ok(Event::End(_)) => {
                    path.pop();
                }
                Ok(Event::Text(text)) => {
                    let value = text
                        .unescape()
                        .map_err(|e| SoapError::Marshalling(format!("invalid XML text: {e}")))?
                        .into_owned();

                    let leaf = path.last().map(String::as_str).unwrap_or("");
                    let parent = path
                        .len()
                        .checked_sub(2)
                        .map(|i| path[i].as_str())
                        .unwrap_or("");

                    match (parent, leaf) {
                        ("country", "name") => name = Some(value),
                        ("country", "population") => population = Some(value),
                        ("country", "capital") => capital = Some(value),
                        ("country", "currency") => currency = Some(value),
                        ("Fault", "faultcode") => fault_code = Some(value),
                        ("Fault", "faultstring") => fault_string = Some(value),
                        _ => {}
                    }
                }
                Ok(_) => {}
            }
        }

        if saw_fault {
            return Err(SoapError::RemoteFault {
                code: fault_code.unwrap_or_else(|| "unknown".to_string()),
                message: fault_string.unwrap_or_default(),
            });
        }

        let name = require("country.name", name)?;
        let capital = require("country.capital", capital)?;
        let population = require("country.population", population)?
            .parse::<u64>()
            .map_err(|e| {
                SoapError::Marshalling(format!("country.population is not a non-negative integer: {e}"))
            })?;
        let currency = require("country.currency", currency)?
            .parse::<CurrencyCode>()
            .map_err(|e| SoapError::Marshalling(e.to_string()))?;

        Ok(CountryResponse {
            country: Country {
                name,
                population,
                capital,
                currency,
            },
        })
    }
}

impl Default for Marshaller {
    fn default() -> Self {
        Self::new()
    }
}

fn require(element: &str, value: Option<String>) -> Result<String, SoapError> {
    value.ok_or_else(|| SoapError::Marshalling(format!("missing element: {element}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAIN_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Header/>
  <SOAP-ENV:Body>
    <ns2:getCountryResponse xmlns:ns2="http://local/gs-producing-web-service">
      <ns2:country>
        <ns2:name>Spain</ns2:name>
        <ns2:population>46704314</ns2:population>
        <ns2:capital>Madrid</ns2:capital>
        <ns2:currency>EUR</ns2:currency>
      </ns2:country>
    </ns2:getCountryResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

    const FAULT_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <SOAP-ENV:Fault>
      <faultcode>SOAP-ENV:Server</faultcode>
      <faultstring>No country found</faultstring>
    </SOAP-ENV:Fault>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

    #[test]
    fn test_marshal_request() {
        let marshaller = Marshaller::new();
        let xml = marshaller
            .marshal_request(&CountryRequest::new("Spain"))
            .unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("soapenv:Envelope"));
        assert!(xml.contains(&format!("xmlns:gs=\"{TARGET_NS}\"")));
        assert!(xml.contains("<gs:getCountryRequest>"));
        assert!(xml.contains("<gs:name>Spain</gs:name>"));
    }

    #[test]
    fn test_marshal_request_forwards_empty_name() {
        let marshaller = Marshaller::new();
        let xml = marshaller.marshal_request(&CountryRequest::new("")).unwrap();

        // Empty names are the remote service's problem; the envelope still
        // carries the name element.
        assert!(xml.contains("<gs:name/>") || xml.contains("<gs:name></gs:name>"));
    }

    #[test]
    fn test_marshal_request_with_custom_namespace() {
        let marshaller = Marshaller::with_namespace("http://example.org/countries");
        assert_eq!(marshaller.target_namespace(), "http://example.org/countries");

        let xml = marshaller
            .marshal_request(&CountryRequest::new("Spain"))
            .unwrap();

        assert!(xml.contains("xmlns:gs=\"http://example.org/countries\""));
    }

    #[test]
    fn test_marshal_request_escapes_name() {
        let marshaller = Marshaller::new();
        let xml = marshaller
            .marshal_request(&CountryRequest::new("Trinidad & Tobago"))
            .unwrap();

        assert!(xml.contains("Trinidad &amp; Tobago"));
    }

    #[test]
    fn test_unmarshal_response() {
        let response = Marshaller::new().unmarshal_response(SPAIN_RESPONSE).unwrap();

        assert_eq!(response.country.name, "Spain");
        assert_eq!(response.country.population, 46_704_314);
        assert_eq!(response.country.capital, "Madrid");
        assert_eq!(response.country.currency, CurrencyCode::Eur);
    }

    #[test]
    fn test_unmarshal_ignores_prefix_choice() {
        let alternate = SPAIN_RESPONSE
            .replace("SOAP-ENV:", "soapenv:")
            .replace("ns2:", "c:");
        let response = Marshaller::new().unmarshal_response(&alternate).unwrap();

        assert_eq!(response.country.population, 46_704_314);
    }

    #[test]
    fn test_unmarshal_missing_population_is_marshalling_error() {
        let truncated = SPAIN_RESPONSE.replace("<ns2:population>46704314</ns2:population>", "");
        let err = Marshaller::new().unmarshal_response(&truncated).unwrap_err();

        assert!(matches!(err, SoapError::Marshalling(_)));
        assert!(err.to_string().contains("country.population"));
    }

    #[test]
    fn test_unmarshal_non_numeric_population_is_marshalling_error() {
        let mangled = SPAIN_RESPONSE.replace("46704314", "lots");
        let err = Marshaller::new().unmarshal_response(&mangled).unwrap_err();

        assert!(matches!(err, SoapError::Marshalling(_)));
    }

    #[test]
    fn test_unmarshal_unknown_currency_is_marshalling_error() {
        let mangled = SPAIN_RESPONSE.replace("EUR", "XXX");
        let err = Marshaller::new().unmarshal_response(&mangled).unwrap_err();

        assert!(matches!(err, SoapError::Marshalling(_)));
    }

    #[test]
    fn test_unmarshal_fault_is_remote_fault() {
        let err = Marshaller::new().unmarshal_response(FAULT_RESPONSE).unwrap_err();

        match err {
            SoapError::RemoteFault { code, message } => {
                assert_eq!(code, "SOAP-ENV:Server");
                assert_eq!(message, "No country found");
            }
            other => panic!("expected remote fault, got {other:?}"),
        }
    }

    #[test]
    fn test_unmarshal_garbage_is_marshalling_error() {
        let err = Marshaller::new()
            .unmarshal_response("<Envelope><Body>")
            .unwrap_err();

        assert!(matches!(err, SoapError::Marshalling(_)));
    }
}
