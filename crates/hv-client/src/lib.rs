//! # harvest-client
//!
//! Core HTTP transport for the Harvest XML API.
//!
//! This crate provides:
//! - HTTP Basic authentication on every request
//! - `Accept`/`Content-Type: application/xml` handling
//! - Status classification into a typed error taxonomy, including the
//!   service's 503 throttle signal
//! - Ordered, form-url-encoded query parameters
//! - The wire date encodings the service expects
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (harvest-rest: resources, entity codec, invoice cache)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HarvestClient                            │
//! │  - Holds credentials + HTTP client                          │
//! │  - Resolves paths against https://{subdomain}.harvestapp.com│
//! │  - Typed XML methods (get_xml, post_xml)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HarvestHttpClient                        │
//! │  - Raw HTTP, one attempt per call                           │
//! │  - Status classification (503 throttle, 200/201 for POST)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use harvest_client::{HarvestClient, HarvestCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), harvest_client::Error> {
//!     let client = HarvestClient::new(HarvestCredentials::new("me@example.com", "pw", "acme"))?;
//!     let people = client.get_text("/people").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
pub mod format;
mod harvest_client;
mod query;
mod request;
mod response;

pub use client::HarvestHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::{HarvestCredentials, HARVEST_HOST};
pub use error::{Error, ErrorKind, Result};
pub use harvest_client::{to_xml, HarvestClient};
pub use query::QueryParams;
pub use request::{RequestBuilder, RequestMethod, APPLICATION_XML};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("harvest-api/", env!("CARGO_PKG_VERSION"));
