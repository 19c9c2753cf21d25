use crate::errors::expertview_error::ExpertViewError;
use crate::http::xml::file_list::FileListResponse;
use crate::http::xml::installations::Installations;
use crate::models::file_list::FileList;
use crate::models::installation_record::InstallationRecord;
use crate::operation::Operation;
use crate::soap::response::decode_return;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Decodes a `return` payload. Line breaks and other ASCII whitespace are ignored.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, ExpertViewError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    Ok(STANDARD.decode(compact)?)
}

/// Rejects a payload whose document element is not named `expected`.
fn check_root(xml: &[u8], expected: &str) -> Result<(), ExpertViewError> {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                let name = element.local_name();
                if name.as_ref() == expected.as_bytes() {
                    return Ok(());
                }

                return Err(ExpertViewError::MalformedPayloadXml(format!(
                    "expected {expected}, found {}",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }

            Ok(Event::Eof) => {
                return Err(ExpertViewError::MalformedPayloadXml(format!(
                    "{expected} not found"
                )));
            }

            Ok(_) => (),
            Err(err) => return Err(ExpertViewError::MalformedPayloadXml(err.to_string())),
        }
    }
}

pub fn parse_file_list(xml: &[u8]) -> Result<FileList, ExpertViewError> {
    check_root(xml, "RESPONSE")?;
    let response: FileListResponse = quick_xml::de::from_reader(xml)
        .map_err(|err| ExpertViewError::MalformedPayloadXml(err.to_string()))?;

    Ok(FileList {
        device_types: response.device_types.device_type,
        records: response.files.record,
    })
}

pub fn parse_installation_records(xml: &[u8]) -> Result<Vec<InstallationRecord>, ExpertViewError> {
    check_root(xml, "INSTALLATIONS")?;
    let installations: Installations = quick_xml::de::from_reader(xml)
        .map_err(|err| ExpertViewError::MalformedPayloadXml(err.to_string()))?;

    Ok(installations.record)
}

/// Decodes a raw `getFileList` response.
pub fn decode_file_list(raw: &[u8]) -> Result<FileList, ExpertViewError> {
    let payload = decode_base64(&decode_return(raw, Operation::GetFileList)?)?;
    parse_file_list(&payload)
}

/// Decodes a raw `getFile` response. The payload is the file itself.
pub fn decode_file(raw: &[u8]) -> Result<Vec<u8>, ExpertViewError> {
    decode_base64(&decode_return(raw, Operation::GetFile)?)
}

/// Decodes a raw `getInstallRecords` response.
pub fn decode_installation_records(raw: &[u8]) -> Result<Vec<InstallationRecord>, ExpertViewError> {
    let payload = decode_base64(&decode_return(raw, Operation::GetInstallRecords)?)?;
    parse_installation_records(&payload)
}
