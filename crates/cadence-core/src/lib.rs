//! Core library for the Cadence task manager.
//!
//! Cadence keeps tasks in SQLite and understands recurring tasks: completing
//! a task that repeats daily, on weekdays, weekly, monthly, yearly or every N
//! days creates its next occurrence, with the reminder shifted by the same
//! offset from the due date.
//!
//! - [`recurrence`]: pure calendar logic computing the next occurrence
//! - [`db`]: SQLite storage for tasks, projects, tags and queued reminders
//! - [`reminders`]: the [`ReminderScheduler`] seam and its implementations
//! - [`manager`]: async [`TaskManager`] tying the pieces together
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{
//!     models::RecurrenceRule,
//!     params::{CreateTask, ListTasks, TaskRef},
//!     TaskManagerBuilder,
//! };
//! use jiff::{civil::date, tz::TimeZone};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = TaskManagerBuilder::new()
//!     .with_database_path(Some("cadence.db"))
//!     .build()
//!     .await?;
//!
//! let task = manager
//!     .create_task(&CreateTask {
//!         title: "Pay rent".to_string(),
//!         due_date: Some(date(2024, 1, 31).at(9, 0, 0, 0).to_zoned(TimeZone::UTC)?),
//!         recurrence_rule: RecurrenceRule::Monthly,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Completing it schedules the next one on 2024-02-29
//! let outcome = manager.complete_task(&TaskRef::new(task.id.to_string())).await?;
//! println!("{outcome}");
//!
//! let open = manager.list_tasks(&ListTasks::default()).await?;
//! println!("{open}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod manager;
pub mod models;
pub mod params;
pub mod recurrence;
pub mod reminders;

// Re-export commonly used types
pub use db::{Database, TaskStore};
pub use display::{
    CompletionResult, CreateResult, DeleteResult, OperationStatus, Projects, Reminders, Tags,
    Tasks, UpdateResult,
};
pub use error::{Result, TaskError};
pub use manager::{TaskManager, TaskManagerBuilder};
pub use models::{
    Priority, Project, RecurrenceRule, Reminder, Tag, Task, TaskFilter, TaskId, TaskStatus,
    UpdateTaskRequest,
};
pub use recurrence::{compute_next_due_date, create_next_occurrence, SkipReason};
pub use reminders::{MemoryReminderScheduler, ReminderScheduler, SqliteReminderScheduler};
