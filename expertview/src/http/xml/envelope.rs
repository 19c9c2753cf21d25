use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct SoapEnvelope {
    #[serde(rename = "Body")]
    pub soap_body: SoapBody,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SoapBody {
    #[serde(rename = "Fault")]
    pub fault: Option<SoapFault>,
    #[serde(rename = "getFileListResponse")]
    pub get_file_list_response: Option<OperationResponse>,
    #[serde(rename = "getFileResponse")]
    pub get_file_response: Option<OperationResponse>,
    #[serde(rename = "getInstallRecordsResponse")]
    pub get_install_records_response: Option<OperationResponse>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SoapFault {
    #[serde(rename = "faultcode", default)]
    pub fault_code: String,
    #[serde(rename = "faultstring", default)]
    pub fault_string: String,
    #[serde(rename = "faultactor")]
    pub fault_actor: Option<String>,
    pub detail: Option<SoapDetail>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SoapDetail {
    #[serde(rename = "AuthenticationException")]
    pub authentication_exception: Option<ServiceException>,
    #[serde(rename = "UnexpectedException")]
    pub unexpected_exception: Option<ServiceException>,
    #[serde(rename = "FirmwareNotSelectableException")]
    pub firmware_not_selectable_exception: Option<ServiceException>,
    #[serde(rename = "NoSuchFileException")]
    pub no_such_file_exception: Option<ServiceException>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ServiceException {
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct OperationResponse {
    #[serde(rename = "return", default)]
    pub return_value: String,
}
