//! Recurring-task engine.
//!
//! Given a recurring task that has just been completed, the engine computes
//! the due date of the next occurrence and builds a brand-new [`Task`] for it.
//! It is pure: no I/O, no shared state, no collaborators. Persisting the new
//! task and registering its reminder is the caller's job (see
//! [`crate::TaskManager::complete_task`]).
//!
//! # Rules
//!
//! | Rule       | Next due date                                          |
//! |------------|--------------------------------------------------------|
//! | `none`     | no recurrence                                          |
//! | `daily`    | due + 1 day                                            |
//! | `weekdays` | due + 1 day, skipping Saturday and Sunday              |
//! | `weekly`   | due + 7 days                                           |
//! | `monthly`  | due + 1 month, day clamped to the month's length       |
//! | `yearly`   | due + 1 year, Feb 29 clamped to Feb 28                 |
//! | `custom`   | due + `recurrence_interval_days` days                  |
//!
//! The reminder keeps its signed offset from the due date: a reminder fifteen
//! minutes before the old due date becomes a reminder fifteen minutes before
//! the new one.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{
//!     models::{RecurrenceRule, Task, TaskStatus},
//!     recurrence,
//! };
//! use jiff::{civil::date, tz::TimeZone};
//!
//! let mut task = Task::new("Pay rent");
//! task.is_recurring = true;
//! task.recurrence_rule = RecurrenceRule::Monthly;
//! task.due_date = Some(date(2024, 1, 31).at(10, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap());
//! task.status = TaskStatus::Completed;
//!
//! let next = recurrence::create_next_occurrence(&task).unwrap();
//! assert_eq!(next.due_date.unwrap().date(), date(2024, 2, 29));
//! assert_eq!(next.status, TaskStatus::NotStarted);
//! assert_ne!(next.id, task.id);
//! ```

pub mod calendar;


use jiff::{Timestamp, Zoned};
use log::{debug, warn};
use thiserror::Error;

use crate::models::{RecurrenceRule, Task, TaskId, TaskStatus};

/// Why a task did not produce a next occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("task is not flagged as recurring")]
    NotRecurring,
    #[error("recurring task has no due date")]
    MissingDueDate,
    #[error("recurring task has no recurrence rule")]
    NoRecurrenceRule,
    #[error("custom recurrence has no interval")]
    MissingCustomInterval,
    #[error("next due date is outside the supported calendar range")]
    OutOfRange,
}

/// Builds the next occurrence of `task`, or `None` when it does not recur.
///
/// The skip reason, if any, is logged: at debug level for tasks that were
/// never meant to recur, as a warning for recurring tasks that cannot.
pub fn create_next_occurrence(task: &Task) -> Option<Task> {
    match next_occurrence(task, Timestamp::now()) {
        Ok(next) => {
            debug!(
                "Task {} recurs as {} due {}",
                task.id,
                next.id,
                next.due_date
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            );
            Some(next)
        }
        Err(SkipReason::NotRecurring) => {
            debug!("Task {} is not recurring", task.id);
            None
        }
        Err(reason) => {
            warn!("Recurring task {} will not recur: {reason}", task.id);
            None
        }
    }
}

/// Builds the next occurrence of `task`, stamping it as created at `now`.
///
/// The returned task has a fresh ID, the computed due date, a recomputed
/// reminder, status [`TaskStatus::NotStarted`] and no completion time.
/// Everything else is copied from `task`, which is left untouched.
///
/// # Errors
///
/// Returns the first failed precondition, checked in this order: the task
/// must be recurring, must have a due date, and the next due date must be
/// computable.
pub fn next_occurrence(task: &Task, now: Timestamp) -> Result<Task, SkipReason> {
    if !task.is_recurring {
        return Err(SkipReason::NotRecurring);
    }
    let due = task.due_date.as_ref().ok_or(SkipReason::MissingDueDate)?;
    let next_due = next_due_date(task.recurrence_rule, task.recurrence_interval_days, due)?;
    let reminder_date = shift_reminder(task, &next_due);

    Ok(Task {
        id: TaskId::generate(),
        due_date: Some(next_due),
        reminder_date,
        status: TaskStatus::NotStarted,
        completed_at: None,
        created_at: now,
        ..task.clone()
    })
}

/// Computes the next due date for `task` according to its recurrence rule.
///
/// Returns `None` for tasks without a due date, with rule `none`, with rule
/// `custom` but no interval, or when the result would leave the supported
/// calendar range. The `is_recurring` flag is not consulted here.
pub fn compute_next_due_date(task: &Task) -> Option<Zoned> {
    let due = task.due_date.as_ref()?;
    next_due_date(task.recurrence_rule, task.recurrence_interval_days, due).ok()
}

fn next_due_date(
    rule: RecurrenceRule,
    interval_days: Option<u32>,
    due: &Zoned,
) -> Result<Zoned, SkipReason> {
    let next = match rule {
        RecurrenceRule::None => return Err(SkipReason::NoRecurrenceRule),
        RecurrenceRule::Daily => calendar::add_days(due, 1),
        RecurrenceRule::Weekdays => calendar::next_weekday(due),
        RecurrenceRule::Weekly => calendar::add_days(due, 7),
        RecurrenceRule::Monthly => calendar::add_month(due, due),
        RecurrenceRule::Yearly => calendar::add_year(due, due),
        RecurrenceRule::Custom => match interval_days {
            Some(days) if days > 0 => calendar::add_days(due, i64::from(days)),
            _ => return Err(SkipReason::MissingCustomInterval),
        },
    };
    next.ok_or(SkipReason::OutOfRange)
}

/// Re-applies the task's reminder offset to `next_due`.
///
/// The offset is the exact signed duration between the old reminder and the
/// old due date. Without a reminder (or without a due date to measure from)
/// the next occurrence gets no reminder.
pub fn shift_reminder(task: &Task, next_due: &Zoned) -> Option<Zoned> {
    let reminder = task.reminder_date.as_ref()?;
    let due = task.due_date.as_ref()?;
    let offset = reminder.timestamp().duration_since(due.timestamp());
    next_due.checked_add(offset).ok()
}
