use crate::credentials::Credentials;
use crate::errors::expertview_error::ExpertViewError;
use crate::operation::Operation;
use crate::soap::{SERVICE_NS, SOAP_ENVELOPE_NS};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt;

/// A single outbound call, serialized once with [to_xml][SoapRequest::to_xml].
pub struct SoapRequest<'a> {
    operation: Operation,
    login: &'a str,
    password_hash: String,
    version: &'a str,
    filename: Option<&'a str>,
}

impl<'a> SoapRequest<'a> {
    pub fn new(operation: Operation, credentials: &'a Credentials, version: &'a str) -> Self {
        Self {
            operation,
            login: &credentials.login,
            password_hash: credentials.password_hash(),
            version,
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Serializes the envelope:
    /// `S:Envelope > S:Header, S:Body > sq:<operation> > login, password, version[, filename]`.
    pub fn to_xml(&self) -> Result<String, ExpertViewError> {
        match (self.operation, self.filename) {
            (Operation::GetFile, None) => {
                return Err(ExpertViewError::MalformedRequest(
                    "getFile needs a filename".to_string(),
                ));
            }

            (Operation::GetFileList | Operation::GetInstallRecords, Some(_)) => {
                return Err(ExpertViewError::MalformedRequest(format!(
                    "{} does not take a filename",
                    self.operation
                )));
            }

            _ => (),
        }

        let mut writer = Writer::new(Vec::new());
        let operation_element = format!("sq:{}", self.operation.name());

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(malformed)?;
        writer
            .write_event(Event::Start(
                BytesStart::new("S:Envelope")
                    .with_attributes([("xmlns:S", SOAP_ENVELOPE_NS), ("xmlns:sq", SERVICE_NS)]),
            ))
            .map_err(malformed)?;
        writer
            .write_event(Event::Empty(BytesStart::new("S:Header")))
            .map_err(malformed)?;
        writer
            .write_event(Event::Start(BytesStart::new("S:Body")))
            .map_err(malformed)?;
        writer
            .write_event(Event::Start(BytesStart::new(operation_element.as_str())))
            .map_err(malformed)?;

        write_text_element(&mut writer, "login", self.login)?;
        write_text_element(&mut writer, "password", &self.password_hash)?;
        write_text_element(&mut writer, "version", self.version)?;
        if let Some(filename) = self.filename {
            write_text_element(&mut writer, "filename", filename)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(operation_element.as_str())))
            .map_err(malformed)?;
        writer
            .write_event(Event::End(BytesEnd::new("S:Body")))
            .map_err(malformed)?;
        writer
            .write_event(Event::End(BytesEnd::new("S:Envelope")))
            .map_err(malformed)?;

        String::from_utf8(writer.into_inner()).map_err(malformed)
    }
}

impl fmt::Debug for SoapRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SoapRequest")
            .field("operation", &self.operation)
            .field("login", &self.login)
            .field("version", &self.version)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), ExpertViewError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(malformed)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(malformed)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(malformed)?;
    Ok(())
}

fn malformed(err: impl fmt::Display) -> ExpertViewError {
    ExpertViewError::MalformedRequest(err.to_string())
}
