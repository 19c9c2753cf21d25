use std::fmt;

/// The remote operations the web service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetFileList,
    GetFile,
    GetInstallRecords,
}

impl Operation {
    /// Name of the request element inside the SOAP body.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetFileList => "getFileList",
            Operation::GetFile => "getFile",
            Operation::GetInstallRecords => "getInstallRecords",
        }
    }

    /// Name of the element the service answers with.
    pub fn response_name(&self) -> &'static str {
        match self {
            Operation::GetFileList => "getFileListResponse",
            Operation::GetFile => "getFileResponse",
            Operation::GetInstallRecords => "getInstallRecordsResponse",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
