//! # harvest-rest
//!
//! Typed access to the Harvest XML API resources and an invoice payment
//! reconciliation workflow.
//!
//! ## Features
//!
//! - **People, clients, projects, tasks** - listings, "updated since" filters and lookups
//! - **Assignments** - people and tasks assigned to a project
//! - **Day entries** - timesheet entries by person or project within a date range
//! - **Invoices** - paged listing, messages, payments and item categories
//! - **Payments** - record a payment against an invoice id
//! - **Reconciliation** - record payments by invoice number via [`InvoiceReconciler`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use harvest_rest::{HarvestCredentials, HarvestRestClient, InvoiceReconciler};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), harvest_rest::Error> {
//!     let client = HarvestRestClient::new(HarvestCredentials::from_env()?)?;
//!
//!     for user in client.users().await? {
//!         println!("{}", user.full_name());
//!     }
//!
//!     let mut reconciler = InvoiceReconciler::new(client);
//!     reconciler
//!         .populate(
//!             NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2015, 12, 31).unwrap(),
//!         )
//!         .await?;
//!     reconciler
//!         .post_payment_by_number("2015-0042", "BANK-REF-9", dec!(250.00))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod clients;
mod day_entries;
mod invoice_cache;
mod invoices;
mod parameters;
mod projects;
mod tasks;
mod users;
pub mod xml;

// Main client
pub use client::HarvestRestClient;

// Reconciliation
pub use invoice_cache::{InvoiceCache, InvoiceReconciler};

// Parameter objects
pub use parameters::{
    DayEntriesByProjectParameters, DayEntriesByUserParameters, RecentInvoicesParameters,
};

// Entities
pub use clients::{Client, ClientCollection};
pub use day_entries::{DayEntry, DayEntryCollection};
pub use invoices::{
    Invoice, InvoiceCollection, InvoiceItemCategory, InvoiceItemCategoryCollection,
    InvoiceMessage, InvoiceMessageCollection, InvoicePayment, InvoicePaymentCollection,
    InvoiceStatus, NewInvoicePayment,
};
pub use projects::{
    Project, ProjectCollection, TaskAssignment, TaskAssignmentCollection, UserAssignment,
    UserAssignmentCollection,
};
pub use tasks::{Task, TaskCollection};
pub use users::{User, UserCollection};

// Re-export transport types callers need alongside the resources
pub use harvest_client::{ClientConfig, Error, ErrorKind, HarvestCredentials, Result};
