//! # harvest-api
//!
//! A client library for the Harvest time-tracking and invoicing XML API.
//!
//! This library provides typed access to Harvest resources with HTTP Basic
//! authentication, throttle detection and an invoice payment reconciliation
//! workflow.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Tracing spans skip credentials
//!
//! ## Crates
//!
//! - **harvest-client** - Core HTTP transport: auth, status classification, query encoding
//! - **harvest-rest** - Resources, XML entities, parameter objects, invoice reconciliation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use harvest_api::{HarvestCredentials, HarvestRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // HARVEST_USERNAME, HARVEST_PASSWORD, HARVEST_SUBDOMAIN
//!     let credentials = HarvestCredentials::from_env()?;
//!     let client = HarvestRestClient::new(credentials)?;
//!
//!     for project in client.projects().await? {
//!         println!("{} {}", project.id, project.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use harvest_client as client;
#[cfg(feature = "rest")]
pub use harvest_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use harvest_client::{ClientConfig, Error, ErrorKind, HarvestClient, HarvestCredentials};
#[cfg(feature = "rest")]
pub use harvest_rest::{HarvestRestClient, InvoiceReconciler};
