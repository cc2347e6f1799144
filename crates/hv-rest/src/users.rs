//! People (users) of a Harvest account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::xml::{flag, nullable};

/// A person with access to the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub telephone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub default_hourly_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_contractor: bool,
    #[serde(default, deserialize_with = "flag")]
    pub has_access_to_all_future_projects: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// `<users type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCollection {
    #[serde(rename = "user", default)]
    pub users: Vec<User>,
}
