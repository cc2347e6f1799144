//! Clients (customers) billed through Harvest.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::xml::{flag, nullable};

/// A customer the account bills.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Client {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "flag")]
    pub active: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub currency_symbol: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub default_invoice_timeframe: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub highrise_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_invoice_kind: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<clients type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientCollection {
    #[serde(rename = "client", default)]
    pub clients: Vec<Client>,
}
