//! A client SDK for the Squarell ExpertView SOAP web service: list the DCF and firmware files an
//! account can provision, download them, and read back installation records.
//! # Usage
//! ```no_run
//! use expertview::{Config, Credentials, ExpertView};
//!
//! # async fn run() -> Result<(), expertview::ExpertViewError> {
//! let client = ExpertView::new(Config::default(), Credentials::new("demo", "demo"))?;
//!
//! let file_list = client.get_file_list().await?;
//! for record in file_list.dcf_records() {
//!     let content = client.get_file(&record.file).await?;
//!     println!("{}: {} bytes", record.name, content.len());
//! }
//! # Ok(())
//! # }
//! ```
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces),
//! through the blocking [exports::client::ExpertView].
//!

pub mod client;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod exports;
pub mod http;
pub mod models;
pub mod operation;
pub mod soap;

uniffi::setup_scaffolding!();

pub use client::ExpertView;
pub use config::{Config, DEFAULT_ENDPOINT, DEFAULT_VERSION};
pub use credentials::{Credentials, hash_password};
pub use errors::expertview_error::ExpertViewError;
pub use http::http_client::{HttpClient, Transport};
pub use models::device_type::DeviceType;
pub use models::file_list::FileList;
pub use models::installation_record::InstallationRecord;
pub use models::record::{Record, RecordKind};
pub use operation::Operation;
