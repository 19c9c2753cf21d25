pub mod http_client;
pub(crate) mod xml;
