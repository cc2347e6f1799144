use tracing::instrument;

use harvest_client::Result;

use crate::day_entries::{DayEntry, DayEntryCollection};
use crate::parameters::{DayEntriesByProjectParameters, DayEntriesByUserParameters};

impl super::HarvestRestClient {
    /// List the entries one person tracked within a date range.
    ///
    /// Both bounds are required; a missing bound fails with
    /// `MissingParameter` before any request is sent.
    #[instrument(skip(self))]
    pub async fn day_entries_by_user(
        &self,
        params: &DayEntriesByUserParameters,
    ) -> Result<Vec<DayEntry>> {
        let path = params
            .query()?
            .apply_to(&format!("/people/{}/entries", params.user_id))?;
        let entries: DayEntryCollection = self.client.get_xml(&path).await?;
        Ok(entries.entries)
    }

    /// List the entries tracked against one project within a date range.
    #[instrument(skip(self))]
    pub async fn day_entries_by_project(
        &self,
        params: &DayEntriesByProjectParameters,
    ) -> Result<Vec<DayEntry>> {
        let path = params
            .query()?
            .apply_to(&format!("/projects/{}/entries", params.project_id))?;
        let entries: DayEntryCollection = self.client.get_xml(&path).await?;
        Ok(entries.entries)
    }
}
