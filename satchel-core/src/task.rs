//! The task record and its completion lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schedulable unit of work.
///
/// The mapper round-trips `status`, `percent` and `completed_at`
/// exactly as found and never forces them into agreement. Commands
/// that change completion go through [`Task::mark_complete`] and
/// [`Task::mark_incomplete`] so the three fields move together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    /// 0 = unset, 1 = highest through 9 = lowest.
    #[serde(default)]
    pub priority: u8,
    /// Percent complete, 0-100.
    #[serde(default)]
    pub percent: u8,
    pub due: Option<DateTime<Utc>>,
    pub start: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Opaque version token from the storage server; never interpreted.
    pub etag: Option<String>,
}

impl Task {
    /// Mark the task completed as of now.
    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Completed;
        self.percent = 100;
        self.completed_at = Some(Utc::now());
    }

    /// Return the task to an open state.
    pub fn mark_incomplete(&mut self) {
        self.status = TaskStatus::NeedsAction;
        self.percent = 0;
        self.completed_at = None;
    }
}

/// Task status (STATUS on a VTODO).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    NeedsAction,
    InProcess,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            TaskStatus::NeedsAction => "NEEDS-ACTION",
            TaskStatus::InProcess => "IN-PROCESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_ics_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NEEDS-ACTION" => Some(TaskStatus::NeedsAction),
            "IN-PROCESS" => Some(TaskStatus::InProcess),
            "COMPLETED" => Some(TaskStatus::Completed),
            "CANCELLED" => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::NeedsAction => "needs-action",
            TaskStatus::InProcess => "in-process",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_complete_moves_all_three_fields() {
        let mut task = Task {
            summary: "Write report".to_string(),
            ..Default::default()
        };

        task.mark_complete();

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.percent, 100);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_mark_incomplete_resets_completion() {
        let mut task = Task {
            summary: "Write report".to_string(),
            ..Default::default()
        };
        task.mark_complete();

        task.mark_incomplete();

        assert_eq!(task.status, TaskStatus::NeedsAction);
        assert_eq!(task.percent, 0);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_status_from_ics_str_rejects_unknown() {
        assert_eq!(TaskStatus::from_ics_str("in-process"), Some(TaskStatus::InProcess));
        assert_eq!(TaskStatus::from_ics_str("DRAFT"), None);
    }
}
