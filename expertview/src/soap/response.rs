use crate::errors::expertview_error::ExpertViewError;
use crate::http::xml::envelope::SoapEnvelope;
use crate::operation::Operation;
use crate::soap::SOAP_ENVELOPE_NS;
use crate::soap::fault::classify;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use std::fmt;

/// Parses the raw response as a SOAP envelope.
pub(crate) fn parse_envelope(raw: &[u8]) -> Result<SoapEnvelope, ExpertViewError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(malformed("empty response body"));
    }

    let xml = std::str::from_utf8(raw).map_err(malformed)?;
    check_envelope(xml)?;

    quick_xml::de::from_str(xml).map_err(malformed)
}

/// The document must be a single SOAP 1.1 `Envelope` with a SOAP 1.1 `Body` child, followed by
/// nothing but whitespace, comments or processing instructions.
fn check_envelope(xml: &str) -> Result<(), ExpertViewError> {
    let mut reader = NsReader::from_str(xml);
    let mut depth = 0usize;
    let mut envelope_seen = false;
    let mut body_seen = false;

    loop {
        let (namespace, event) = reader.read_resolved_event().map_err(malformed)?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                if depth == 0 {
                    if envelope_seen {
                        return Err(malformed("content after the envelope"));
                    }
                    if !is_soap_element(&namespace, element, "Envelope") {
                        return Err(malformed(format!(
                            "root {} is not a SOAP envelope",
                            String::from_utf8_lossy(element.name().as_ref())
                        )));
                    }
                    envelope_seen = true;
                } else if depth == 1 && is_soap_element(&namespace, element, "Body") {
                    body_seen = true;
                }

                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }

            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(ref text) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(malformed("text outside the envelope"));
                }
            }

            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => (),
            Event::Eof => break,
            _ if depth == 0 => return Err(malformed("content outside the envelope")),
            _ => (),
        }
    }

    if !body_seen {
        return Err(malformed("SOAP body not found"));
    }

    Ok(())
}

fn is_soap_element(namespace: &ResolveResult, element: &BytesStart, local_name: &str) -> bool {
    matches!(namespace, ResolveResult::Bound(Namespace(ns)) if *ns == SOAP_ENVELOPE_NS.as_bytes())
        && element.local_name().as_ref() == local_name.as_bytes()
}

fn malformed(err: impl fmt::Display) -> ExpertViewError {
    ExpertViewError::MalformedEnvelope(err.to_string())
}

/// Returns the still base64 encoded `return` text of the operation's response element.
/// A fault short-circuits into its classified error.
pub(crate) fn extract_return(
    envelope: SoapEnvelope,
    operation: Operation,
) -> Result<String, ExpertViewError> {
    let body = envelope.soap_body;
    if let Some(fault) = body.fault {
        return Err(classify(fault, operation));
    }

    let response = match operation {
        Operation::GetFileList => body.get_file_list_response,
        Operation::GetFile => body.get_file_response,
        Operation::GetInstallRecords => body.get_install_records_response,
    }
    .ok_or(ExpertViewError::ResponseNotFound(operation.response_name()))?;

    let return_value = response.return_value.trim();
    if return_value.is_empty() {
        return Err(ExpertViewError::EmptyResponse(operation.response_name()));
    }

    Ok(return_value.to_string())
}

/// Envelope phase of decoding: raw bytes to the `return` text.
pub fn decode_return(raw: &[u8], operation: Operation) -> Result<String, ExpertViewError> {
    extract_return(parse_envelope(raw)?, operation)
}
