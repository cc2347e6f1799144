//! Harvest account credentials.
//!
//! The password is redacted in Debug output.

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Error, ErrorKind, Result};

/// Host every Harvest account subdomain lives under.
pub const HARVEST_HOST: &str = "harvestapp.com";

/// Username, password and account subdomain for a Harvest account.
///
/// Immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct HarvestCredentials {
    username: String,
    password: String,
    subdomain: String,
}

impl std::fmt::Debug for HarvestCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarvestCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

impl HarvestCredentials {
    /// Create new credentials with the given values.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            subdomain: subdomain.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `HARVEST_USERNAME`
    /// - `HARVEST_PASSWORD`
    /// - `HARVEST_SUBDOMAIN`
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        Ok(Self::new(
            var("HARVEST_USERNAME")?,
            var("HARVEST_PASSWORD")?,
            var("HARVEST_SUBDOMAIN")?,
        ))
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the account subdomain.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// `https://{subdomain}.harvestapp.com`
    pub fn base_url(&self) -> String {
        format!("https://{}.{}", self.subdomain, HARVEST_HOST)
    }

    /// HTTP Basic `Authorization` header value for these credentials.
    pub fn authorization_header(&self) -> String {
        let token = general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}
