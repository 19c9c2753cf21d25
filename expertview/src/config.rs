use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://playground.expertview-live.com:443/ExpertWebservice-play/Webservice";
pub const DEFAULT_VERSION: &str = "2.5.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration, fixed once the client is built.
///
/// `accept_invalid_certs` defaults to `true` because the playground endpoint uses a self-signed
/// certificate. Turn it off when targeting production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub version: String,
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Config {
    /// Empty values fall back to [DEFAULT_ENDPOINT] and [DEFAULT_VERSION].
    pub fn new(endpoint: impl Into<String>, version: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let version = version.into();
        let defaults = Self::default();

        Self {
            endpoint: if endpoint.is_empty() {
                defaults.endpoint
            } else {
                endpoint
            },
            version: if version.is_empty() {
                defaults.version
            } else {
                version
            },
            ..defaults
        }
    }

    /// Deadline for a whole call, connection included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            user_agent: concat!("expertview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
