//! Tasks that time can be tracked against.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::xml::{flag, nullable};

/// A task type shared across projects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "flag")]
    pub billable_by_default: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "flag")]
    pub deactivated: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub default_hourly_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<tasks type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskCollection {
    #[serde(rename = "task", default)]
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tasks() {
        let xml = r#"
            <tasks type="array">
              <task>
                <id type="integer">7</id>
                <name>Design</name>
                <billable-by-default type="boolean">true</billable-by-default>
                <deactivated type="boolean">false</deactivated>
                <default-hourly-rate type="decimal" nil="true"/>
                <is-default type="boolean">true</is-default>
                <created-at type="datetime">2014-05-01T09:00:00Z</created-at>
              </task>
            </tasks>"#;

        let tasks: TaskCollection = crate::xml::from_str(xml).unwrap();
        let task = &tasks.tasks[0];
        assert_eq!(task.name, "Design");
        assert!(task.billable_by_default && task.is_default && !task.deactivated);
        assert_eq!(task.default_hourly_rate, None);
        assert!(task.created_at.is_some());
    }
}
