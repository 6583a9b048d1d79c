//! Parameter structures for Cadence operations
//!
//! These are the inputs of the [`crate::TaskManager`] methods. They carry no
//! CLI framework derives: the CLI defines its own clap argument structs and
//! converts them into these with `From` impls, keeping the core free of
//! interface concerns.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   TaskManager   │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Tasks are addressed with [`TaskRef`], which accepts a full task ID or any
//! unique prefix of one (the eight-character short form shown in listings is
//! enough).

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use crate::models::{Priority, RecurrenceRule, UpdateTaskRequest};

/// Generic parameters for project and tag operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Reference to a task by full ID or unique ID prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRef {
    pub id: String,
}

impl TaskRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for creating a new task.
///
/// The task is recurring exactly when `recurrence_rule` is not
/// [`RecurrenceRule::None`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required)
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<Zoned>,
    pub reminder_date: Option<Zoned>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub recurrence_rule: RecurrenceRule,
    /// Day count, required for [`RecurrenceRule::Custom`]
    pub recurrence_interval_days: Option<u32>,
    pub project_id: Option<u64>,
    #[serde(default)]
    pub tag_ids: Vec<u64>,
    /// Parent task, by full ID or unique prefix
    pub parent: Option<String>,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Include completed and cancelled tasks
    pub all: bool,
    pub status: Option<crate::models::TaskStatus>,
    pub project_id: Option<u64>,
    pub tag_id: Option<u64>,
    pub due_before: Option<Timestamp>,
    /// Case-insensitive title search
    pub search: Option<String>,
}

/// Parameters for updating a task.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub id: String,
    pub changes: UpdateTaskRequest,
}

/// Parameters for permanently deleting a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTask {
    pub id: String,
    /// Must be true; guards against accidental deletion
    pub confirmed: bool,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
}

/// Parameters for creating a tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

/// Parameters for listing queued reminders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListReminders {
    /// Only reminders triggering at or before this instant
    pub before: Option<Timestamp>,
}
