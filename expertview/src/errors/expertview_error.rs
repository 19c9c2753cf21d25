use std::error::Error;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Errors the SDK might return.
///
/// Transport failures are kept apart from protocol and fault errors, since only the former
/// are plausibly transient.
#[derive(Debug, uniffi::Error, thiserror::Error)]
#[uniffi(flat_error)]
pub enum ExpertViewError {
    #[error("Credentials need both a login and a password")]
    MissingCredentials,
    #[error("Could not create runtime")]
    CouldNotCreateRuntime,
    #[error("Could not build the request envelope: {0}")]
    MalformedRequest(String),
    #[error("Error transmitting data: {0}")]
    TransportFailure(#[source] BoxError),
    #[error("Invalid SOAP envelope: {0}")]
    MalformedEnvelope(String),
    #[error("{0} not found")]
    ResponseNotFound(&'static str),
    #[error("Empty {0}")]
    EmptyResponse(&'static str),
    #[error("Error decoding base64 data: {0}")]
    MalformedBase64(#[from] base64::DecodeError),
    #[error("Error decoding xml data: {0}")]
    MalformedPayloadXml(String),
    #[error("Authentication error. Check your login and password: {0}")]
    AuthenticationFailed(String),
    #[error("The service hit an unexpected error: {0}")]
    UnexpectedServiceError(String),
    #[error("Firmware is not selectable: {0}")]
    FirmwareNotSelectable(String),
    #[error("No such file: {0}")]
    NoSuchFile(String),
    #[error("Unknown fault {code}: {message}")]
    UnknownFault { code: String, message: String },
}

impl ExpertViewError {
    /// Whether the error happened below the SOAP layer. These are the only errors worth retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, ExpertViewError::TransportFailure(_))
    }

    /// Whether the service answered with a SOAP fault.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            ExpertViewError::AuthenticationFailed(_)
                | ExpertViewError::UnexpectedServiceError(_)
                | ExpertViewError::FirmwareNotSelectable(_)
                | ExpertViewError::NoSuchFile(_)
                | ExpertViewError::UnknownFault { .. }
        )
    }
}

impl From<reqwest::Error> for ExpertViewError {
    fn from(err: reqwest::Error) -> Self {
        ExpertViewError::TransportFailure(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_failures_are_not_transport() {
        for error in [
            ExpertViewError::CouldNotCreateRuntime,
            ExpertViewError::MissingCredentials,
            ExpertViewError::MalformedRequest("getFile needs a filename".to_string()),
        ] {
            assert!(!error.is_transport(), "{error}");
            assert!(!error.is_fault(), "{error}");
        }

        let error = ExpertViewError::TransportFailure("connection reset".into());
        assert!(error.is_transport());
    }
}
