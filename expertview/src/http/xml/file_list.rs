use crate::models::device_type::DeviceType;
use crate::models::record::Record;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename = "RESPONSE")]
pub(crate) struct FileListResponse {
    #[serde(rename = "DEVICETYPES", default)]
    pub device_types: DeviceTypes,
    #[serde(rename = "FILES", default)]
    pub files: Files,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct DeviceTypes {
    #[serde(rename = "DEVICETYPE", default)]
    pub device_type: Vec<DeviceType>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct Files {
    #[serde(rename = "RECORD", default)]
    pub record: Vec<Record>,
}
