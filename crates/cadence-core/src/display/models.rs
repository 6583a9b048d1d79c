//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; everything here renders markdown
//! for the terminal.

use std::fmt;

use jiff::Timestamp;

use super::datetime::{LocalDateTime, ScheduledAt};
use crate::models::{Priority, Project, RecurrenceRule, Reminder, Tag, Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A custom recurrence interval in the largest unit that divides it.
///
/// Intervals are always stored in days; weeks and months only exist on
/// screen.
///
/// ```rust
/// use cadence_core::display::Every;
///
/// assert_eq!(Every(14).to_string(), "every 2 weeks");
/// assert_eq!(Every(60).to_string(), "every 2 months");
/// assert_eq!(Every(10).to_string(), "every 10 days");
/// ```
pub struct Every(pub u32);

impl fmt::Display for Every {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0;
        let (count, unit) = if days > 0 && days % 7 == 0 {
            (days / 7, "week")
        } else if days > 0 && days % 30 == 0 {
            (days / 30, "month")
        } else {
            (days, "day")
        };

        if count == 1 {
            write!(f, "every {unit}")
        } else {
            write!(f, "every {count} {unit}s")
        }
    }
}

/// How often a task repeats, or `None` if it does not.
pub(crate) fn repeat_label(task: &Task) -> Option<String> {
    if !task.is_recurring {
        return None;
    }
    Some(match (task.recurrence_rule, task.recurrence_interval_days) {
        (RecurrenceRule::Custom, Some(days)) => Every(days).to_string(),
        (RecurrenceRule::Custom, None) => "custom (no interval)".to_string(),
        (rule, _) => rule.as_str().to_string(),
    })
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.id.short())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(due) = &self.due_date {
            let overdue = if self.is_overdue(Timestamp::now()) {
                " **(overdue)**"
            } else {
                ""
            };
            writeln!(f, "- Due: {}{overdue}", ScheduledAt(due))?;
        }
        if let Some(reminder) = &self.reminder_date {
            writeln!(f, "- Reminder: {}", ScheduledAt(reminder))?;
        }
        if let Some(repeat) = repeat_label(self) {
            writeln!(f, "- Repeats: {repeat}")?;
        }
        if let Some(project) = self.project_id {
            writeln!(f, "- Project: {project}")?;
        }
        if !self.tag_ids.is_empty() {
            let tags: Vec<String> = self.tag_ids.iter().map(ToString::to_string).collect();
            writeln!(f, "- Tags: {}", tags.join(", "))?;
        }
        if let Some(parent) = &self.parent_id {
            writeln!(f, "- Parent: {}", parent.short())?;
        }
        if !self.subtask_ids.is_empty() {
            let subtasks: Vec<String> = self.subtask_ids.iter().map(|id| id.short()).collect();
            writeln!(f, "- Subtasks: {}", subtasks.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** (ID: {})", self.name, self.id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **#{}** (ID: {})", self.name, self.id)
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {} (`{}`)",
            ScheduledAt(&self.trigger_at),
            self.task_title,
            self.task_id.short()
        )
    }
}
