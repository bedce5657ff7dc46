// Task entity and its creation/update payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single to-do item.
///
/// `id` and `created_at` are assigned by the store at creation and never change
/// afterwards. The serde layout is the persisted wire format: camelCase keys and
/// ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Input for creating a task: every field of [`Task`] except the
/// store-assigned `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: Status,
}

/// Partial update: only supplied fields change. Identity fields (`id`,
/// `created_at`) are not representable here, so no update can alter them.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

impl Task {
    /// Merge a patch onto this task in place.
    pub(crate) fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for Priority {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(eyre::eyre!("Unknown priority: {} (expected Low/Medium/High)", s)),
        }
    }
}

impl FromStr for Status {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tolerate hyphen/underscore spellings from CLI callers
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "pending" => Ok(Status::Pending),
            "in progress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(eyre::eyre!(
                "Unknown status: {} (expected Pending/In Progress/Completed)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: "task_0001".to_string(),
            title: "Write report".to_string(),
            description: "Quarterly numbers for the board".to_string(),
            due_date: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            priority: Priority::High,
            status: Status::InProgress,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_task_wire_format() {
        let json = serde_json::to_string(&sample_task()).unwrap();

        // camelCase keys
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"createdAt\""));
        // enum labels exactly as persisted by the original app
        assert!(json.contains("\"priority\":\"High\""));
        assert!(json.contains("\"status\":\"In Progress\""));
        // ISO-8601 timestamps
        assert!(json.contains("2025-01-15T00:00:00Z"));
    }

    #[test]
    fn test_task_round_trip_reconstructs_dates() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back, task);
        assert_eq!(back.due_date, task.due_date);
        assert_eq!(back.created_at, task.created_at);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Pending).unwrap(), "\"Pending\"");
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"In Progress\"");
        assert_eq!(serde_json::to_string(&Status::Completed).unwrap(), "\"Completed\"");
    }

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!("Pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut task = sample_task();
        let before = task.clone();

        task.apply(TaskPatch {
            title: Some("Write final report".to_string()),
            status: Some(Status::Completed),
            ..Default::default()
        });

        assert_eq!(task.title, "Write final report");
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.description, before.description);
        assert_eq!(task.due_date, before.due_date);
        assert_eq!(task.priority, before.priority);
        assert_eq!(task.id, before.id);
        assert_eq!(task.created_at, before.created_at);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TaskPatch::default().is_empty());
        assert!(
            !TaskPatch {
                title: Some("x".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
