use crate::config::Config;
use crate::errors::expertview_error::ExpertViewError;
use async_trait::async_trait;
use log::trace;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Sends a serialized envelope and returns the raw response body.
///
/// Implementations must hand back the body whatever the HTTP status is, since SOAP faults
/// usually come with a `500`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, endpoint: &str, envelope: String) -> Result<Vec<u8>, ExpertViewError>;
}

/// [Transport] over HTTPS with reqwest. Every call opens its own connection.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, ExpertViewError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn call(&self, endpoint: &str, envelope: String) -> Result<Vec<u8>, ExpertViewError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/xml; charset=\"utf-8\""),
        );

        let response = self
            .client
            .post(endpoint)
            .headers(headers)
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        trace!("S: {status} {}", String::from_utf8_lossy(&body));

        Ok(body.to_vec())
    }
}
