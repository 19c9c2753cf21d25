use serde::Deserialize;
use std::fmt;

/// Kinds of downloadable artifacts in the catalog.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum RecordKind {
    /// A device configuration file.
    #[serde(rename = "DCF")]
    Dcf,

    /// A device firmware image.
    Firmware,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Dcf => "DCF",
            RecordKind::Firmware => "Firmware",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry. [file][Record::file] is the reference to pass to
/// [get_file][crate::client::ExpertView::get_file], [name][Record::name] is the human readable name.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct Record {
    #[serde(rename = "@KIND")]
    pub kind: RecordKind,
    /// Only set on firmware records, names the device type the image is built for.
    #[serde(rename = "@PRODUCTNUMBER", default)]
    pub product_number: Option<String>,
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "FILE", default)]
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_displays_wire_name() {
        assert_eq!(RecordKind::Dcf.to_string(), "DCF");
        assert_eq!(RecordKind::Firmware.to_string(), "Firmware");
    }
}
