//! SOAP request construction and response decoding.
//!
//! Responses are decoded in two stages: [response] turns the raw envelope into the operation's
//! `return` text (or a classified [fault]), then [payload] base64 decodes it and, for the list
//! operations, parses the inner XML document.

pub mod fault;
pub mod payload;
pub mod request;
pub mod response;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace qualifying the service's operation elements.
pub const SERVICE_NS: &str = "http://webservice.expertview.squarell.com/";

pub use payload::{decode_file, decode_file_list, decode_installation_records};
pub use request::SoapRequest;
