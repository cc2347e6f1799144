use chrono::NaiveDateTime;
use tracing::instrument;

use harvest_client::format::format_updated_since;
use harvest_client::{QueryParams, Result};

use crate::users::{User, UserCollection};

impl super::HarvestRestClient {
    /// List every person on the account.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>> {
        let users: UserCollection = self.client.get_xml("/people").await?;
        Ok(users.users)
    }

    /// List people changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn users_updated_since(&self, updated_since: NaiveDateTime) -> Result<Vec<User>> {
        let path = QueryParams::new()
            .with("updated_since", format_updated_since(updated_since))
            .apply_to("/people")?;
        let users: UserCollection = self.client.get_xml(&path).await?;
        Ok(users.users)
    }

    /// Get one person by id.
    #[instrument(skip(self))]
    pub async fn user(&self, user_id: u64) -> Result<User> {
        self.client.get_xml(&format!("/people/{}", user_id)).await
    }
}
