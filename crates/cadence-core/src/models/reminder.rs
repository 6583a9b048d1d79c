//! Queued reminder model.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use super::TaskId;

/// A reminder waiting in the queue for a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub task_id: TaskId,

    /// Title of the task at the time the queue was read
    pub task_title: String,

    pub trigger_at: Zoned,
}
