use chrono::NaiveDateTime;
use tracing::instrument;

use harvest_client::format::format_updated_since;
use harvest_client::{QueryParams, Result};

use crate::projects::{
    Project, ProjectCollection, TaskAssignment, TaskAssignmentCollection, UserAssignment,
    UserAssignmentCollection,
};

impl super::HarvestRestClient {
    /// List every project.
    #[instrument(skip(self))]
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.list_projects(QueryParams::new()).await
    }

    /// List projects changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn projects_updated_since(&self, updated_since: NaiveDateTime) -> Result<Vec<Project>> {
        self.list_projects(
            QueryParams::new().with("updated_since", format_updated_since(updated_since)),
        )
        .await
    }

    /// List the projects of one client.
    #[instrument(skip(self))]
    pub async fn projects_for_client(&self, client_id: u64) -> Result<Vec<Project>> {
        self.list_projects(QueryParams::new().with("client", client_id))
            .await
    }

    /// List the projects of one client changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn projects_for_client_updated_since(
        &self,
        client_id: u64,
        updated_since: NaiveDateTime,
    ) -> Result<Vec<Project>> {
        self.list_projects(
            QueryParams::new()
                .with("client", client_id)
                .with("updated_since", format_updated_since(updated_since)),
        )
        .await
    }

    /// Get one project by id.
    #[instrument(skip(self))]
    pub async fn project(&self, project_id: u64) -> Result<Project> {
        self.client
            .get_xml(&format!("/projects/{}", project_id))
            .await
    }

    /// List the people assigned to a project.
    #[instrument(skip(self))]
    pub async fn user_assignments(&self, project_id: u64) -> Result<Vec<UserAssignment>> {
        let path = format!("/projects/{}/user_assignments", project_id);
        let assignments: UserAssignmentCollection = self.client.get_xml(&path).await?;
        Ok(assignments.assignments)
    }

    /// List person assignments on a project changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn user_assignments_updated_since(
        &self,
        project_id: u64,
        updated_since: NaiveDateTime,
    ) -> Result<Vec<UserAssignment>> {
        let path = QueryParams::new()
            .with("updated_since", format_updated_since(updated_since))
            .apply_to(&format!("/projects/{}/user_assignments", project_id))?;
        let assignments: UserAssignmentCollection = self.client.get_xml(&path).await?;
        Ok(assignments.assignments)
    }

    /// List the tasks enabled on a project.
    #[instrument(skip(self))]
    pub async fn task_assignments(&self, project_id: u64) -> Result<Vec<TaskAssignment>> {
        let path = format!("/projects/{}/task_assignments", project_id);
        let assignments: TaskAssignmentCollection = self.client.get_xml(&path).await?;
        Ok(assignments.assignments)
    }

    /// List task assignments on a project changed since `updated_since`.
    #[instrument(skip(self))]
    pub async fn task_assignments_updated_since(
        &self,
        project_id: u64,
        updated_since: NaiveDateTime,
    ) -> Result<Vec<TaskAssignment>> {
        let path = QueryParams::new()
            .with("updated_since", format_updated_since(updated_since))
            .apply_to(&format!("/projects/{}/task_assignments", project_id))?;
        let assignments: TaskAssignmentCollection = self.client.get_xml(&path).await?;
        Ok(assignments.assignments)
    }

    async fn list_projects(&self, query: QueryParams) -> Result<Vec<Project>> {
        let path = query.apply_to("/projects")?;
        let projects: ProjectCollection = self.client.get_xml(&path).await?;
        Ok(projects.projects)
    }
}
