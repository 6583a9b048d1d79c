//! Filter types for querying tasks.

use jiff::Timestamp;

use super::TaskStatus;

/// Filter options for querying tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Filter by task title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by exact status. Overrides `include_completed`.
    pub status: Option<TaskStatus>,

    /// Only tasks in this project
    pub project_id: Option<u64>,

    /// Only tasks carrying this tag
    pub tag_id: Option<u64>,

    /// Only tasks due strictly before this instant
    pub due_before: Option<Timestamp>,

    /// Also return completed and cancelled tasks
    pub include_completed: bool,
}

impl From<&crate::params::ListTasks> for TaskFilter {
    /// Convert ListTasks parameters to a TaskFilter for task queries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{models::TaskFilter, params::ListTasks};
    ///
    /// let params = ListTasks { all: true, ..Default::default() };
    /// let filter: TaskFilter = (&params).into();
    /// assert!(filter.include_completed);
    /// ```
    fn from(params: &crate::params::ListTasks) -> Self {
        Self {
            title_contains: params.search.clone(),
            status: params.status,
            project_id: params.project_id,
            tag_id: params.tag_id,
            due_before: params.due_before,
            include_completed: params.all,
        }
    }
}
