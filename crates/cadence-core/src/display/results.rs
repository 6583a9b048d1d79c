//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Project, Tag, Task};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{display::CreateResult, models::Task};
///
/// let task = Task::new("Renew passport");
/// let output = CreateResult::new(task.clone()).to_string();
/// assert!(output.contains(&format!("Created task with ID: {}", task.id.short())));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id.short())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created project '{}' with ID: {}",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for CreateResult<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created tag '{}' with ID: {}",
            self.resource.name, self.resource.id
        )
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id.short())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title,
            self.resource.id.short()
        )
    }
}

impl fmt::Display for DeleteResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted project '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted tag '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

/// Outcome of completing a task: the completed task and, for recurring
/// tasks, the occurrence created in its place.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    pub completed: Task,
    pub next: Option<Task>,
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed task '{}' (ID: {})",
            self.completed.title,
            self.completed.id.short()
        )?;

        match &self.next {
            Some(next) => {
                writeln!(f)?;
                writeln!(f, "Next occurrence created with ID: {}", next.id.short())?;
                writeln!(f)?;
                write!(f, "{next}")?;
            }
            None if self.completed.is_recurring => {
                writeln!(f)?;
                writeln!(f, "No next occurrence could be scheduled.")?;
            }
            None => {}
        }
        Ok(())
    }
}
