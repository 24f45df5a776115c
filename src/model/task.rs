use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Task priority. Declaration order is the sort rank (LOW < MEDIUM < HIGH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Upper-case name as shown in the list and stored on disk
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// Map a choice key (`1`, `2`, `3`) to a priority
    pub fn from_choice_key(c: char) -> Option<Priority> {
        match c {
            '1' => Some(Priority::Low),
            '2' => Some(Priority::Medium),
            '3' => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Todo,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    /// Set once when the task is created
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_date: NaiveDateTime,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new TODO task stamped with the current local time
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Task {
            title: title.into(),
            creation_date: Local::now().naive_local(),
            priority,
            status: TaskStatus::Todo,
        }
    }

    /// Calendar date part of the creation timestamp (`YYYY-MM-DD`)
    pub fn date_label(&self) -> String {
        self.creation_date.format("%Y-%m-%d").to_string()
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Accept ISO timestamps with or without fractional seconds, a space
/// separator, or a bare date. Anything else becomes the epoch so one bad
/// record does not take the rest of the file down with it.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(parse_timestamp(&raw).unwrap_or_else(|| {
        tracing::warn!(value = %raw, "unreadable creation_date, using epoch");
        NaiveDateTime::default()
    }))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
