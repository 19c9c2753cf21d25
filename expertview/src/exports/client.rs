use crate::config::Config;
use crate::credentials::Credentials;
use crate::errors::expertview_error::ExpertViewError;
use crate::models::file_list::FileList;
use crate::models::installation_record::InstallationRecord;
use tokio::runtime::Runtime;

/// Blocking client for foreign language bindings. Each method runs one call to completion.
#[derive(uniffi::Object)]
pub struct ExpertView {
    inner: crate::client::ExpertView,
    rt: Runtime,
}

#[uniffi::export]
impl ExpertView {
    /// Builds a client for `endpoint` speaking `version`, empty values meaning the defaults.
    #[uniffi::constructor]
    pub fn new(
        endpoint: String,
        version: String,
        login: String,
        password: String,
    ) -> Result<Self, ExpertViewError> {
        let rt = Runtime::new().or(Err(ExpertViewError::CouldNotCreateRuntime))?;
        let inner = crate::client::ExpertView::new(
            Config::new(endpoint, version),
            Credentials::new(login, password),
        )?;

        Ok(Self { inner, rt })
    }

    /// Lists the device types and the DCF/firmware files available to the account.
    pub fn get_file_list(&self) -> Result<FileList, ExpertViewError> {
        self.rt.block_on(self.inner.get_file_list())
    }

    /// Downloads a file by its record's file reference.
    pub fn get_file(&self, filename: String) -> Result<Vec<u8>, ExpertViewError> {
        self.rt.block_on(self.inner.get_file(&filename))
    }

    /// Lists what was provisioned to the account's units.
    pub fn get_installation_records(&self) -> Result<Vec<InstallationRecord>, ExpertViewError> {
        self.rt.block_on(self.inner.get_installation_records())
    }
}
