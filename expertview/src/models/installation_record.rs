use serde::Deserialize;

/// What was provisioned to a serial numbered unit.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
#[serde(default)]
pub struct InstallationRecord {
    #[serde(rename = "@SN")]
    pub serial_number: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "TELEMATIC")]
    pub telematic: String,
    #[serde(rename = "HARDWAREPROF")]
    pub hardware_profile: String,
    #[serde(rename = "SOFTWAREPROF")]
    pub software_profile: String,
    #[serde(rename = "DCF")]
    pub dcf: String,
    #[serde(rename = "FIRMWARE")]
    pub firmware: String,
    #[serde(rename = "KEY")]
    pub key: String,
    #[serde(rename = "USERNAME")]
    pub username: String,
}
