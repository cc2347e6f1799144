use chrono::NaiveDateTime;
use tracing::instrument;

use harvest_client::format::format_updated_since;
use harvest_client::{QueryParams, Result};

use crate::tasks::{Task, TaskCollection};

impl super::HarvestRestClient {
    /// List every task.
    #[instrument(skip(self))]
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        let tasks: TaskCollection = self.client.get_xml("/tasks").await?;
        Ok(tasks.tasks)
    }

    /// List tasks changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn tasks_updated_since(&self, updated_since: NaiveDateTime) -> Result<Vec<Task>> {
        let path = QueryParams::new()
            .with("updated_since", format_updated_since(updated_since))
            .apply_to("/tasks")?;
        let tasks: TaskCollection = self.client.get_xml(&path).await?;
        Ok(tasks.tasks)
    }

    /// Get one task by id.
    #[instrument(skip(self))]
    pub async fn task(&self, task_id: u64) -> Result<Task> {
        self.client.get_xml(&format!("/tasks/{}", task_id)).await
    }
}
