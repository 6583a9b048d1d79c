//! Request types for updating models.

use jiff::Zoned;

use super::{Priority, RecurrenceRule, TaskStatus};

/// Field-by-field task update. `None` leaves a field untouched; for the
/// nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Default, Clone)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
    pub due_date: Option<Option<Zoned>>,
    pub reminder_date: Option<Option<Zoned>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub is_recurring: Option<bool>,
    pub recurrence_rule: Option<RecurrenceRule>,
    pub recurrence_interval_days: Option<Option<u32>>,
    pub project_id: Option<Option<u64>>,
    pub tag_ids: Option<Vec<u64>>,
}

impl UpdateTaskRequest {
    /// Whether the request would change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.notes.is_none()
            && self.due_date.is_none()
            && self.reminder_date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.is_recurring.is_none()
            && self.recurrence_rule.is_none()
            && self.recurrence_interval_days.is_none()
            && self.project_id.is_none()
            && self.tag_ids.is_none()
    }

    /// Human-readable list of the fields this request touches.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Updated title to '{title}'"));
        }
        if let Some(notes) = &self.notes {
            changes.push(if notes.is_some() { "Updated notes" } else { "Cleared notes" }.to_string());
        }
        if let Some(due) = &self.due_date {
            changes.push(match due {
                Some(due) => format!("Set due date to {due}"),
                None => "Cleared due date".to_string(),
            });
        }
        if let Some(reminder) = &self.reminder_date {
            changes.push(match reminder {
                Some(reminder) => format!("Set reminder to {reminder}"),
                None => "Cleared reminder".to_string(),
            });
        }
        if let Some(status) = self.status {
            changes.push(format!("Changed status to {}", status.as_str()));
        }
        if let Some(priority) = self.priority {
            changes.push(format!("Changed priority to {}", priority.as_str()));
        }
        if let Some(recurring) = self.is_recurring {
            changes.push(
                if recurring { "Enabled recurrence" } else { "Disabled recurrence" }.to_string(),
            );
        }
        if let Some(rule) = self.recurrence_rule {
            changes.push(format!("Changed recurrence rule to {}", rule.as_str()));
        }
        if let Some(interval) = self.recurrence_interval_days {
            changes.push(match interval {
                Some(days) => format!("Set custom interval to {days} days"),
                None => "Cleared custom interval".to_string(),
            });
        }
        if let Some(project) = self.project_id {
            changes.push(match project {
                Some(id) => format!("Moved to project {id}"),
                None => "Removed from project".to_string(),
            });
        }
        if self.tag_ids.is_some() {
            changes.push("Replaced tags".to_string());
        }
        changes
    }
}
