use crate::models::installation_record::InstallationRecord;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename = "INSTALLATIONS")]
pub(crate) struct Installations {
    #[serde(rename = "RECORD", default)]
    pub record: Vec<InstallationRecord>,
}
