//! High-level task manager API.
//!
//! [`TaskManager`] coordinates the database, the recurrence engine and the
//! reminder scheduler. Every operation opens its own SQLite connection on the
//! blocking thread pool, so a manager is cheap to share between tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   TaskManager   │───▶│    Database     │    │   Recurrence    │
//! │ (task_ops,      │    │   (via db/)     │    │    engine       │
//! │  label_ops)     │───▶│                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             ▲
//!          ├─────────────────────────────────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │    Reminder     │
//! │   Scheduler     │
//! └─────────────────┘
//! ```
//!
//! Reminders are registered only after the write they belong to has been
//! committed.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{
//!     models::RecurrenceRule,
//!     params::{CreateTask, TaskRef},
//!     TaskManagerBuilder,
//! };
//! use jiff::{civil::date, tz::TimeZone};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let manager = TaskManagerBuilder::new()
//!     .with_database_path(Some(dir.path().join("cadence.db")))
//!     .build()
//!     .await?;
//!
//! let task = manager
//!     .create_task(&CreateTask {
//!         title: "Take out the bins".to_string(),
//!         due_date: Some(date(2024, 5, 10).at(19, 0, 0, 0).to_zoned(TimeZone::UTC)?),
//!         recurrence_rule: RecurrenceRule::Weekly,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let outcome = manager.complete_task(&TaskRef::new(task.id.to_string())).await?;
//! assert!(outcome.next.is_some());
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TaskError},
    models::Task,
    reminders::ReminderScheduler,
};

pub mod builder;
pub mod label_ops;
pub mod task_ops;


pub use builder::TaskManagerBuilder;

/// Main interface for managing tasks, projects, tags and reminders.
pub struct TaskManager {
    pub(crate) db_path: PathBuf,
    pub(crate) scheduler: Arc<dyn ReminderScheduler>,
}

impl TaskManager {
    pub(crate) fn new(db_path: PathBuf, scheduler: Arc<dyn ReminderScheduler>) -> Self {
        Self { db_path, scheduler }
    }

    /// Path of the SQLite database backing this manager.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TaskError::join)?
    }

    /// Runs `op` on the blocking pool with both a connection and the
    /// scheduler. The scheduler may do its own I/O.
    pub(crate) async fn with_db_and_scheduler<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database, &dyn ReminderScheduler) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let scheduler = Arc::clone(&self.scheduler);
        self.with_db(move |db| op(db, scheduler.as_ref())).await
    }
}

/// Brings the scheduler in line with a stored task: open tasks with a
/// reminder date are (re)scheduled, everything else is cancelled.
pub(crate) fn sync_reminder(scheduler: &dyn ReminderScheduler, task: &Task) -> Result<()> {
    match (&task.reminder_date, task.is_open()) {
        (Some(trigger_at), true) => {
            scheduler.schedule(&task.id, trigger_at)?;
            log::debug!("Reminder for task {} set to {trigger_at}", task.id);
        }
        _ => scheduler.cancel(&task.id)?,
    }
    Ok(())
}
