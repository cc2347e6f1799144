//! Harvest resource client.
//!
//! This client wraps `HarvestClient` from `harvest-client` and provides one
//! typed method per resource listing or lookup.

use harvest_client::{ClientConfig, HarvestClient, HarvestCredentials, Result};

mod clients;
mod day_entries;
mod invoices;
mod people;
mod projects;
mod tasks;

/// Harvest resource client.
///
/// Every method validates its parameters, builds the resource path and
/// query, performs one GET (or one POST for payments) and decodes the XML
/// response into the matching entity type.
///
/// # Example
///
/// ```rust,ignore
/// use harvest_rest::{HarvestRestClient, RecentInvoicesParameters};
///
/// let client = HarvestRestClient::new(HarvestCredentials::from_env()?)?;
///
/// let people = client.users().await?;
/// let page = client
///     .recent_invoices(&RecentInvoicesParameters::new().with_page(1))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct HarvestRestClient {
    client: HarvestClient,
}

impl HarvestRestClient {
    /// Create a resource client for the account described by `credentials`.
    pub fn new(credentials: HarvestCredentials) -> Result<Self> {
        let client = HarvestClient::new(credentials)?;
        Ok(Self { client })
    }

    /// Create a resource client with custom HTTP configuration.
    pub fn with_config(credentials: HarvestCredentials, config: ClientConfig) -> Result<Self> {
        let client = HarvestClient::with_config(credentials, config)?;
        Ok(Self { client })
    }

    /// Create a resource client from an existing HarvestClient.
    pub fn from_client(client: HarvestClient) -> Self {
        Self { client }
    }

    /// Get the underlying HarvestClient.
    pub fn inner(&self) -> &HarvestClient {
        &self.client
    }

    /// Get the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::HarvestRestClient;
    use harvest_client::{ClientConfig, HarvestCredentials};
    use wiremock::MockServer;

    /// Resource client pointed at a mock server, authenticated as user/pass.
    pub(crate) fn client_for(server: &MockServer) -> HarvestRestClient {
        HarvestRestClient::with_config(
            HarvestCredentials::new("user", "pass", "acme"),
            ClientConfig::builder().with_base_url(server.uri()).build(),
        )
        .unwrap()
    }
}
