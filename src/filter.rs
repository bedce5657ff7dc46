// Query filtering over the in-memory task collection

use crate::task::{Priority, Status, Task};
use eyre::Result;

/// Sentinel label meaning "no constraint on this dimension".
pub const ALL: &str = "All";

/// Filter for querying tasks. An unset dimension matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskFilter {
    /// Filter with no constraints; matches every task.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Build a filter from UI-style selections, where an absent value or the
    /// sentinel `"All"` (any case) means no constraint on that dimension.
    pub fn from_labels(priority: Option<&str>, status: Option<&str>) -> Result<Self> {
        let priority = match priority {
            None => None,
            Some(s) if s.eq_ignore_ascii_case(ALL) => None,
            Some(s) => Some(s.parse::<Priority>()?),
        };
        let status = match status {
            None => None,
            Some(s) if s.eq_ignore_ascii_case(ALL) => None,
            Some(s) => Some(s.parse::<Status>()?),
        };
        Ok(Self { priority, status })
    }

    /// True if the task satisfies every supplied constraint.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(priority: Priority, status: Status) -> Task {
        Task {
            id: "task_test".to_string(),
            title: "A task".to_string(),
            description: "Some description".to_string(),
            due_date: Utc::now(),
            priority,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unconstrained_filter_matches_everything() {
        let filter = TaskFilter::any();
        assert!(filter.matches(&task(Priority::Low, Status::Pending)));
        assert!(filter.matches(&task(Priority::High, Status::Completed)));
    }

    #[test]
    fn test_single_dimension() {
        let filter = TaskFilter::any().with_priority(Priority::High);
        assert!(filter.matches(&task(Priority::High, Status::Pending)));
        assert!(filter.matches(&task(Priority::High, Status::Completed)));
        assert!(!filter.matches(&task(Priority::Low, Status::Pending)));
    }

    #[test]
    fn test_conjunction() {
        let filter = TaskFilter::any()
            .with_priority(Priority::High)
            .with_status(Status::Completed);
        assert!(filter.matches(&task(Priority::High, Status::Completed)));
        assert!(!filter.matches(&task(Priority::High, Status::Pending)));
        assert!(!filter.matches(&task(Priority::Low, Status::Completed)));
    }

    #[test]
    fn test_from_labels_all_sentinel() {
        let filter = TaskFilter::from_labels(Some("All"), Some("All")).unwrap();
        assert_eq!(filter, TaskFilter::any());

        // Case-insensitive
        let filter = TaskFilter::from_labels(Some("all"), None).unwrap();
        assert_eq!(filter, TaskFilter::any());
    }

    #[test]
    fn test_from_labels_mixed() {
        let filter = TaskFilter::from_labels(Some("High"), Some("All")).unwrap();
        assert_eq!(filter.priority, Some(Priority::High));
        assert_eq!(filter.status, None);

        let filter = TaskFilter::from_labels(None, Some("In Progress")).unwrap();
        assert_eq!(filter.priority, None);
        assert_eq!(filter.status, Some(Status::InProgress));
    }

    #[test]
    fn test_from_labels_rejects_unknown() {
        assert!(TaskFilter::from_labels(Some("urgent"), None).is_err());
        assert!(TaskFilter::from_labels(None, Some("done")).is_err());
    }
}
