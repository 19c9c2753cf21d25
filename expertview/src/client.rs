use crate::config::Config;
use crate::credentials::Credentials;
use crate::errors::expertview_error::ExpertViewError;
use crate::http::http_client::{HttpClient, Transport};
use crate::models::file_list::FileList;
use crate::models::installation_record::InstallationRecord;
use crate::operation::Operation;
use crate::soap;
use crate::soap::SoapRequest;
use log::{debug, trace};

/// Client for the ExpertView web service. Configuration and credentials are bound at construction
/// and never change afterwards, so a single instance can serve concurrent callers.
pub struct ExpertView {
    config: Config,
    credentials: Credentials,
    transport: Box<dyn Transport>,
}

impl ExpertView {
    /// Validates the credentials and builds an HTTPS transport from `config`.
    pub fn new(config: Config, credentials: Credentials) -> Result<Self, ExpertViewError> {
        credentials.validate()?;
        let transport = HttpClient::new(&config)?;
        Ok(Self {
            config,
            credentials,
            transport: Box::new(transport),
        })
    }

    /// Same as [new][ExpertView::new] but sends through the given [Transport].
    pub fn with_transport(
        config: Config,
        credentials: Credentials,
        transport: impl Transport + 'static,
    ) -> Result<Self, ExpertViewError> {
        credentials.validate()?;
        Ok(Self {
            config,
            credentials,
            transport: Box::new(transport),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    pub fn login(&self) -> &str {
        &self.credentials.login
    }

    /// Lists the device types and the DCF/firmware files available to the account.
    pub async fn get_file_list(&self) -> Result<FileList, ExpertViewError> {
        let raw = self.call(self.request(Operation::GetFileList)).await?;
        soap::decode_file_list(&raw)
    }

    /// Downloads a file by the [file][crate::models::record::Record::file] reference of a record.
    pub async fn get_file(&self, filename: &str) -> Result<Vec<u8>, ExpertViewError> {
        let raw = self
            .call(self.request(Operation::GetFile).with_filename(filename))
            .await?;
        soap::decode_file(&raw)
    }

    /// Lists what was provisioned to the account's units.
    pub async fn get_installation_records(
        &self,
    ) -> Result<Vec<InstallationRecord>, ExpertViewError> {
        let raw = self.call(self.request(Operation::GetInstallRecords)).await?;
        soap::decode_installation_records(&raw)
    }

    fn request(&self, operation: Operation) -> SoapRequest<'_> {
        SoapRequest::new(operation, &self.credentials, &self.config.version)
    }

    async fn call(&self, request: SoapRequest<'_>) -> Result<Vec<u8>, ExpertViewError> {
        let envelope = request.to_xml()?;
        debug!("Calling {} on {}", request.operation(), self.config.endpoint);
        trace!("C: {request:?}");

        self.transport.call(&self.config.endpoint, envelope).await
    }
}
