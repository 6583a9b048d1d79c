//! Task operations for the TaskManager.

use jiff::Timestamp;
use log::info;

use super::{sync_reminder, TaskManager};
use crate::{
    display::{CompletionResult, Reminders, Tasks},
    error::{Result, TaskError},
    models::{RecurrenceRule, Task, TaskFilter, TaskStatus},
    params::{CreateTask, DeleteTask, ListReminders, ListTasks, TaskRef, UpdateTask},
    recurrence,
};

impl TaskManager {
    /// Creates a task and queues its reminder.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` for an empty title or a custom
    /// recurrence without a positive interval, and the `*NotFound` variants
    /// when the referenced project, tags or parent do not exist.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        check_recurrence(params.recurrence_rule, params.recurrence_interval_days)?;

        let params = params.clone();
        self.with_db_and_scheduler(move |db, scheduler| {
            let parent_id = params
                .parent
                .as_deref()
                .map(|reference| db.resolve_task_id(reference))
                .transpose()?;

            let mut task = Task::new(params.title);
            task.notes = params.notes.filter(|notes| !notes.trim().is_empty());
            task.due_date = params.due_date;
            task.reminder_date = params.reminder_date;
            task.priority = params.priority;
            task.is_recurring = params.recurrence_rule != RecurrenceRule::None;
            task.recurrence_rule = params.recurrence_rule;
            task.recurrence_interval_days = params.recurrence_interval_days;
            task.project_id = params.project_id;
            task.tag_ids = params.tag_ids;
            task.parent_id = parent_id;

            let task = db.create_task(&task)?;
            info!("Created task {} '{}'", task.id, task.title);

            sync_reminder(scheduler, &task)?;
            Ok(task)
        })
        .await
    }

    /// Retrieves a task by full ID or unique prefix.
    ///
    /// Returns `None` when nothing matches; an ambiguous prefix is an error.
    pub async fn get_task(&self, params: &TaskRef) -> Result<Option<Task>> {
        let reference = params.id.clone();
        self.with_db(move |db| match db.resolve_task_id(&reference) {
            Ok(id) => db.get_task(&id),
            Err(TaskError::TaskNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        })
        .await
    }

    /// Lists tasks, open ones only unless `params.all` or a status is given.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Tasks> {
        let filter = TaskFilter::from(params);
        let tasks = self.with_db(move |db| db.list_tasks(&filter)).await?;
        Ok(Tasks(tasks))
    }

    /// Applies an update and brings the task's reminder in line with it.
    ///
    /// Setting a recurrence rule without touching `is_recurring` turns
    /// recurrence on (or off, for [`RecurrenceRule::None`]). Returns `None`
    /// if the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` for an empty request, for a status
    /// change to completed (use [`TaskManager::complete_task`], which also
    /// spawns the next occurrence) or when the result would be a custom
    /// recurrence without a positive interval.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Option<Task>> {
        let mut changes = params.changes.clone();
        if changes.is_empty() {
            return Err(TaskError::invalid_input("changes").with_reason("nothing to update"));
        }
        if changes.status == Some(TaskStatus::Completed) {
            return Err(TaskError::invalid_input("status")
                .with_reason("complete tasks with the complete operation"));
        }
        if changes.is_recurring.is_none() {
            changes.is_recurring = changes
                .recurrence_rule
                .map(|rule| rule != RecurrenceRule::None);
        }

        let reference = params.id.clone();
        self.with_db_and_scheduler(move |db, scheduler| {
            let id = match db.resolve_task_id(&reference) {
                Ok(id) => id,
                Err(TaskError::TaskNotFound { .. }) => return Ok(None),
                Err(e) => return Err(e),
            };
            let Some(current) = db.get_task(&id)? else {
                return Ok(None);
            };

            let rule = changes.recurrence_rule.unwrap_or(current.recurrence_rule);
            let interval = changes
                .recurrence_interval_days
                .unwrap_or(current.recurrence_interval_days);
            check_recurrence(rule, interval)?;

            let Some(task) = db.update_task(&id, changes)? else {
                return Ok(None);
            };
            info!("Updated task {}", task.id);

            sync_reminder(scheduler, &task)?;
            Ok(Some(task))
        })
        .await
    }

    /// Marks a task completed and, if it recurs, creates its next
    /// occurrence.
    ///
    /// The completion and the successor are committed in one transaction.
    /// Only then is the completed task's reminder cancelled and the
    /// successor's reminder queued.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::TaskNotFound` for an unknown task and
    /// `TaskError::InvalidInput` if the task is already completed.
    pub async fn complete_task(&self, params: &TaskRef) -> Result<CompletionResult> {
        let reference = params.id.clone();
        self.with_db_and_scheduler(move |db, scheduler| {
            let id = db.resolve_task_id(&reference)?;
            let original = db
                .get_task(&id)?
                .ok_or_else(|| TaskError::task_not_found(&id))?;

            if original.status == TaskStatus::Completed {
                return Err(TaskError::invalid_input("status")
                    .with_reason(format!("task {} is already completed", original.id.short())));
            }

            let mut completed = original;
            completed.status = TaskStatus::Completed;
            completed.completed_at = Some(Timestamp::now());

            let next = recurrence::create_next_occurrence(&completed);
            db.complete_task_with_successor(&completed, next.as_ref())?;
            info!("Completed task {} '{}'", completed.id, completed.title);

            sync_reminder(scheduler, &completed)?;
            if let Some(next) = &next {
                info!(
                    "Spawned next occurrence {} of task {}",
                    next.id, completed.id
                );
                sync_reminder(scheduler, next)?;
            }

            Ok(CompletionResult { completed, next })
        })
        .await
    }

    /// Permanently deletes a task and cancels its reminder.
    ///
    /// Uses the get-before-delete pattern: returns the deleted task, or
    /// `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` if `confirmed` is false.
    pub async fn delete_task(&self, params: &DeleteTask) -> Result<Option<Task>> {
        if !params.confirmed {
            return Err(TaskError::invalid_input("confirmed").with_reason(
                "Task deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let reference = params.id.clone();
        self.with_db_and_scheduler(move |db, scheduler| {
            let id = match db.resolve_task_id(&reference) {
                Ok(id) => id,
                Err(TaskError::TaskNotFound { .. }) => return Ok(None),
                Err(e) => return Err(e),
            };
            let Some(task) = db.get_task(&id)? else {
                return Ok(None);
            };

            db.delete_task(&id)?;
            scheduler.cancel(&id)?;
            info!("Deleted task {} '{}'", task.id, task.title);
            Ok(Some(task))
        })
        .await
    }

    /// Lists reminders queued in the database, soonest first.
    ///
    /// Only reflects reminders handled by the default SQLite scheduler.
    pub async fn pending_reminders(&self, params: &ListReminders) -> Result<Reminders> {
        let before = params.before;
        let reminders = self.with_db(move |db| db.list_reminders(before)).await?;
        Ok(Reminders(reminders))
    }
}

/// A custom rule needs a positive day count; no rule accepts a zero interval.
fn check_recurrence(rule: RecurrenceRule, interval_days: Option<u32>) -> Result<()> {
    match (rule, interval_days) {
        (_, Some(0)) => Err(TaskError::invalid_input("recurrence_interval_days")
            .with_reason("interval must be at least one day")),
        (RecurrenceRule::Custom, None) => Err(TaskError::invalid_input("recurrence_interval_days")
            .with_reason("custom recurrence needs an interval in days")),
        _ => Ok(()),
    }
}
