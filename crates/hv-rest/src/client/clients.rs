use chrono::NaiveDateTime;
use tracing::instrument;

use harvest_client::format::format_updated_since;
use harvest_client::{QueryParams, Result};

use crate::clients::{Client, ClientCollection};

impl super::HarvestRestClient {
    /// List every client.
    #[instrument(skip(self))]
    pub async fn clients(&self) -> Result<Vec<Client>> {
        let clients: ClientCollection = self.client.get_xml("/clients").await?;
        Ok(clients.clients)
    }

    /// List clients changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn clients_updated_since(&self, updated_since: NaiveDateTime) -> Result<Vec<Client>> {
        let path = QueryParams::new()
            .with("updated_since", format_updated_since(updated_since))
            .apply_to("/clients")?;
        let clients: ClientCollection = self.client.get_xml(&path).await?;
        Ok(clients.clients)
    }

    /// Get one client by id.
    #[instrument(skip(self))]
    pub async fn client(&self, client_id: u64) -> Result<Client> {
        self.client.get_xml(&format!("/clients/{}", client_id)).await
    }
}
