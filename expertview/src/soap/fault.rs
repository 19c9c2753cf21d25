use crate::errors::expertview_error::ExpertViewError;
use crate::http::xml::envelope::{ServiceException, SoapFault};
use crate::operation::Operation;
use log::warn;

/// The exception a SOAP fault's `detail` names, with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FaultDetail {
    Authentication(String),
    Unexpected(String),
    FirmwareNotSelectable(String),
    NoSuchFile(String),
}

impl SoapFault {
    /// First recognized exception in the detail, in classification order.
    pub(crate) fn detail_variant(&self) -> Option<FaultDetail> {
        let detail = self.detail.as_ref()?;
        let message = |exception: &ServiceException| {
            if exception.message.is_empty() {
                self.fault_string.clone()
            } else {
                exception.message.clone()
            }
        };

        if let Some(exception) = &detail.authentication_exception {
            Some(FaultDetail::Authentication(message(exception)))
        } else if let Some(exception) = &detail.unexpected_exception {
            Some(FaultDetail::Unexpected(message(exception)))
        } else if let Some(exception) = &detail.firmware_not_selectable_exception {
            Some(FaultDetail::FirmwareNotSelectable(message(exception)))
        } else {
            detail
                .no_such_file_exception
                .as_ref()
                .map(|exception| FaultDetail::NoSuchFile(message(exception)))
        }
    }
}

/// Maps a fault to the error returned for `operation`. File specific exceptions are only
/// meaningful for `getFile`; elsewhere they count as unknown faults.
pub(crate) fn classify(fault: SoapFault, operation: Operation) -> ExpertViewError {
    warn!(
        "{operation} failed with fault {} from {}: {}",
        fault.fault_code,
        fault.fault_actor.as_deref().unwrap_or("server"),
        fault.fault_string
    );

    match (fault.detail_variant(), operation) {
        (Some(FaultDetail::Authentication(message)), _) => {
            ExpertViewError::AuthenticationFailed(message)
        }

        (Some(FaultDetail::Unexpected(message)), _) => {
            ExpertViewError::UnexpectedServiceError(message)
        }

        (Some(FaultDetail::FirmwareNotSelectable(message)), Operation::GetFile) => {
            ExpertViewError::FirmwareNotSelectable(message)
        }

        (Some(FaultDetail::NoSuchFile(message)), Operation::GetFile) => {
            ExpertViewError::NoSuchFile(message)
        }

        _ => ExpertViewError::UnknownFault {
            code: fault.fault_code,
            message: fault.fault_string,
        },
    }
}
