//! Timesheet day entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::xml::{flag, nullable};

/// Hours one person tracked against one task on one day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DayEntry {
    pub id: u64,
    pub user_id: u64,
    pub project_id: u64,
    pub task_id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub spent_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub hours: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_billed: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_closed: bool,
    #[serde(default, deserialize_with = "flag")]
    pub adjustment_record: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub timer_started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<day-entries type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayEntryCollection {
    #[serde(rename = "day-entry", default)]
    pub entries: Vec<DayEntry>,
}

impl DayEntryCollection {
    /// Sum of hours across all entries, treating missing hours as zero.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().filter_map(|e| e.hours).sum()
    }
}
