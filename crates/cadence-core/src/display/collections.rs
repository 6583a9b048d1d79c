//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints one line per item and handles the empty case itself.

use std::{fmt, ops::Index};

use jiff::Timestamp;

use super::{datetime::ScheduledAt, models::repeat_label};
use crate::models::{Project, Reminder, Tag, Task, TaskStatus};

/// Newtype wrapper for displaying a task list.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{display::Tasks, models::Task};
///
/// let tasks = Tasks(vec![Task::new("Buy milk")]);
/// let output = tasks.to_string();
/// assert!(output.contains("Buy milk"));
/// assert!(output.starts_with("- [ ]"));
///
/// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn write_task_line(f: &mut fmt::Formatter<'_>, task: &Task, now: Timestamp) -> fmt::Result {
    let check = match task.status {
        TaskStatus::Completed => "[x]",
        TaskStatus::Cancelled => "[-]",
        _ => "[ ]",
    };
    write!(f, "- {check} **{}** `{}`", task.title, task.id.short())?;

    if let Some(due) = &task.due_date {
        write!(f, " due {}", ScheduledAt(due))?;
        if task.is_overdue(now) {
            write!(f, " (overdue)")?;
        }
    }
    if let Some(repeat) = repeat_label(task) {
        write!(f, " ↻ {repeat}")?;
    }
    if task.status == TaskStatus::InProgress || task.status == TaskStatus::Postponed {
        write!(f, " {}", task.status.with_icon())?;
    }
    writeln!(f)
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        let now = Timestamp::now();
        for task in &self.0 {
            write_task_line(f, task, now)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying projects.
#[derive(Debug, Clone, Default)]
pub struct Projects(pub Vec<Project>);

impl Projects {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for project in &self.0 {
            write!(f, "{project}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying tags.
#[derive(Debug, Clone, Default)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tags found.");
        }
        for tag in &self.0 {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying queued reminders.
#[derive(Debug, Clone, Default)]
pub struct Reminders(pub Vec<Reminder>);

impl Reminders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reminder> {
        self.0.iter()
    }
}

impl fmt::Display for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No pending reminders.");
        }
        for reminder in &self.0 {
            write!(f, "{reminder}")?;
        }
        Ok(())
    }
}
