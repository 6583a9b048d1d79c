//! Task model definition.

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use super::{Priority, RecurrenceRule, TaskId, TaskStatus};

/// A single task, or one occurrence of a recurring task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier, regenerated for every occurrence
    pub id: TaskId,

    /// Brief title of the task
    pub title: String,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the task is due, in the zone it was scheduled in
    pub due_date: Option<Zoned>,

    /// When the task was marked completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Current status of the task
    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    /// Gates whether completing the task spawns a successor
    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default)]
    pub recurrence_rule: RecurrenceRule,

    /// Day count for [`RecurrenceRule::Custom`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_interval_days: Option<u32>,

    /// When to remind the user about the task
    pub reminder_date: Option<Zoned>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Owning project, by ID
    pub project_id: Option<u64>,

    /// Attached tags, by ID
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<u64>,

    /// Parent task, by ID
    pub parent_id: Option<TaskId>,

    /// Child tasks, by ID
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtask_ids: Vec<TaskId>,
}

impl Task {
    /// Creates an open, non-recurring task with a fresh ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            notes: None,
            due_date: None,
            completed_at: None,
            status: TaskStatus::NotStarted,
            priority: Priority::default(),
            is_recurring: false,
            recurrence_rule: RecurrenceRule::None,
            recurrence_interval_days: None,
            reminder_date: None,
            created_at: Timestamp::now(),
            project_id: None,
            tag_ids: Vec::new(),
            parent_id: None,
            subtask_ids: Vec::new(),
        }
    }

    /// Whether the task still needs attention.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Whether the task is open and its due date lies before `now`.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.is_open()
            && self
                .due_date
                .as_ref()
                .is_some_and(|due| due.timestamp() < now)
    }
}
