//! Data models for tasks, projects and tags.
//!
//! This module contains the core domain models of the Cadence task manager.
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures apart from presentation
//! logic.
//!
//! # Dates
//!
//! Due dates and reminders are [`jiff::Zoned`] values: recurrence works on the
//! calendar (month lengths, weekdays, wall-clock time) of the zone the task was
//! scheduled in. Creation and completion instants are plain
//! [`jiff::Timestamp`]s.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Priority, RecurrenceRule, Task, TaskStatus};
//! use jiff::{civil::date, tz::TimeZone};
//!
//! let mut task = Task::new("Water the plants");
//! task.priority = Priority::High;
//! task.is_recurring = true;
//! task.recurrence_rule = RecurrenceRule::Weekly;
//! task.due_date = Some(date(2024, 5, 10).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap());
//!
//! assert_eq!(task.status, TaskStatus::NotStarted);
//! assert!(task.is_open());
//! ```

pub mod filters;
pub mod ids;
pub mod project;
pub mod reminder;
pub mod requests;
pub mod rule;
pub mod status;
pub mod task;

#[cfg(test)]
mod tests;

pub use filters::TaskFilter;
pub use ids::TaskId;
pub use project::{Project, Tag};
pub use reminder::Reminder;
pub use requests::UpdateTaskRequest;
pub use rule::RecurrenceRule;
pub use status::{Priority, TaskStatus};
pub use task::Task;
