use serde::Deserialize;

/// A device family the account can provision, e.g. `8000-1` "Normal (Solid/Flex)".
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DeviceType {
    #[serde(rename = "@DESCRIPTION", default)]
    pub description: String,
    #[serde(rename = "@PRODUCTNUMBER", default)]
    pub product_number: String,
}
