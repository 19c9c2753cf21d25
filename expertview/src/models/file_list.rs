use crate::models::device_type::DeviceType;
use crate::models::record::{Record, RecordKind};

/// Result of `getFileList`, both sequences in the order the service sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct FileList {
    pub device_types: Vec<DeviceType>,
    pub records: Vec<Record>,
}

impl FileList {
    pub fn dcf_records(&self) -> impl Iterator<Item = &Record> {
        self.records_of_kind(RecordKind::Dcf)
    }

    pub fn firmware_records(&self) -> impl Iterator<Item = &Record> {
        self.records_of_kind(RecordKind::Firmware)
    }

    fn records_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |record| record.kind == kind)
    }
}
