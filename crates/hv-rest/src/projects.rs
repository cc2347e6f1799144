//! Projects and their per-user / per-task assignments.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::xml::{flag, nullable};

/// A project belonging to a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub client_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub active: bool,
    #[serde(default, deserialize_with = "flag")]
    pub billable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub bill_by: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub hourly_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub budget_by: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub cost_budget: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub starts_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub ends_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub hint_earliest_record_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub hint_latest_record_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<projects type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectCollection {
    #[serde(rename = "project", default)]
    pub projects: Vec<Project>,
}

/// A person assigned to a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserAssignment {
    pub id: u64,
    pub user_id: u64,
    pub project_id: u64,
    #[serde(default, deserialize_with = "flag")]
    pub is_project_manager: bool,
    #[serde(default, deserialize_with = "flag")]
    pub deactivated: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub hourly_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub estimate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<user-assignments type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserAssignmentCollection {
    #[serde(rename = "user-assignment", default)]
    pub assignments: Vec<UserAssignment>,
}

/// A task enabled on a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TaskAssignment {
    pub id: u64,
    pub project_id: u64,
    pub task_id: u64,
    #[serde(default, deserialize_with = "flag")]
    pub billable: bool,
    #[serde(default, deserialize_with = "flag")]
    pub deactivated: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub hourly_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub estimate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<task-assignments type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskAssignmentCollection {
    #[serde(rename = "task-assignment", default)]
    pub assignments: Vec<TaskAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_project() {
        let xml = r#"
            <project>
              <id type="integer">408</id>
              <client-id type="integer">3398386</client-id>
              <name>Website redesign</name>
              <code>WR-1</code>
              <active type="boolean">true</active>
              <billable type="boolean">true</billable>
              <bill-by>Project</bill-by>
              <hourly-rate type="decimal">125.00</hourly-rate>
              <budget type="decimal" nil="true"/>
              <budget-by>none</budget-by>
              <notes></notes>
              <starts-on type="date">2015-01-05</starts-on>
              <ends-on type="date" nil="true"/>
              <hint-earliest-record-at type="date">2015-01-06</hint-earliest-record-at>
            </project>"#;

        let project: Project = crate::xml::from_str(xml).unwrap();
        assert_eq!(project.id, 408);
        assert_eq!(project.client_id, Some(3398386));
        assert_eq!(project.hourly_rate, Some(dec!(125.00)));
        assert_eq!(project.budget, None);
        assert_eq!(project.notes, None);
        assert_eq!(project.starts_on, NaiveDate::from_ymd_opt(2015, 1, 5));
        assert_eq!(project.ends_on, None);
    }

    #[test]
    fn test_parse_assignments() {
        let xml = r#"
            <user-assignments type="array">
              <user-assignment>
                <id type="integer">11</id>
                <user-id type="integer">508343</user-id>
                <project-id type="integer">408</project-id>
                <is-project-manager type="boolean">true</is-project-manager>
                <deactivated type="boolean">false</deactivated>
                <hourly-rate type="decimal">100.0</hourly-rate>
              </user-assignment>
            </user-assignments>"#;
        let users: UserAssignmentCollection = crate::xml::from_str(xml).unwrap();
        assert_eq!(users.assignments.len(), 1);
        assert!(users.assignments[0].is_project_manager);

        let xml = r#"
            <task-assignments type="array">
              <task-assignment>
                <id type="integer">21</id>
                <project-id type="integer">408</project-id>
                <task-id type="integer">7</task-id>
                <billable type="boolean">true</billable>
                <budget type="decimal" nil="true"/>
              </task-assignment>
              <task-assignment>
                <id type="integer">22</id>
                <project-id type="integer">408</project-id>
                <task-id type="integer">8</task-id>
              </task-assignment>
            </task-assignments>"#;
        let tasks: TaskAssignmentCollection = crate::xml::from_str(xml).unwrap();
        assert_eq!(
            tasks.assignments.iter().map(|a| a.task_id).collect::<Vec<_>>(),
            vec![7, 8]
        );
        assert!(tasks.assignments[0].billable);
        assert!(!tasks.assignments[1].billable);
    }
}
