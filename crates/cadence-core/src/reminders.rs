//! Reminder scheduling.
//!
//! A [`ReminderScheduler`] holds at most one pending point-in-time reminder
//! per task. The recurrence engine never talks to a scheduler; the
//! [`crate::TaskManager`] registers reminders only after the task they belong
//! to has been committed to the store.
//!
//! Two implementations ship with the crate:
//!
//! - [`SqliteReminderScheduler`] queues reminders in the `reminders` table of
//!   the task database, where the CLI can list them.
//! - [`MemoryReminderScheduler`] keeps them in a map, for tests and
//!   embedding.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use jiff::{Timestamp, Zoned};
use log::debug;

use crate::{
    db::Database,
    error::Result,
    models::{Reminder, TaskId},
};

/// Schedules and cancels the reminder tied to a task.
pub trait ReminderScheduler: Send + Sync {
    /// Registers a reminder for `task_id` at `trigger_at`, replacing any
    /// reminder already pending for that task.
    fn schedule(&self, task_id: &TaskId, trigger_at: &Zoned) -> Result<()>;

    /// Drops the pending reminder for `task_id`, if there is one.
    fn cancel(&self, task_id: &TaskId) -> Result<()>;
}

/// Reminder queue stored alongside the tasks in SQLite.
#[derive(Debug, Clone)]
pub struct SqliteReminderScheduler {
    db_path: PathBuf,
}

impl SqliteReminderScheduler {
    /// Creates a scheduler writing to the database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Queued reminders by trigger time, optionally only those triggering at
    /// or before `before`.
    pub fn pending(&self, before: Option<Timestamp>) -> Result<Vec<Reminder>> {
        Database::new(&self.db_path)?.list_reminders(before)
    }
}

impl ReminderScheduler for SqliteReminderScheduler {
    fn schedule(&self, task_id: &TaskId, trigger_at: &Zoned) -> Result<()> {
        let mut db = Database::new(&self.db_path)?;
        db.upsert_reminder(task_id, trigger_at)?;
        debug!("Queued reminder for task {task_id} at {trigger_at}");
        Ok(())
    }

    fn cancel(&self, task_id: &TaskId) -> Result<()> {
        let mut db = Database::new(&self.db_path)?;
        if db.delete_reminder(task_id)? {
            debug!("Cancelled reminder for task {task_id}");
        }
        Ok(())
    }
}

/// In-process reminder map.
#[derive(Debug, Default)]
pub struct MemoryReminderScheduler {
    reminders: Mutex<BTreeMap<TaskId, Zoned>>,
}

impl MemoryReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending trigger time for a task.
    pub fn get(&self, task_id: &TaskId) -> Option<Zoned> {
        self.reminders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(task_id)
            .cloned()
    }

    /// Number of pending reminders.
    pub fn len(&self) -> usize {
        self.reminders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReminderScheduler for MemoryReminderScheduler {
    fn schedule(&self, task_id: &TaskId, trigger_at: &Zoned) -> Result<()> {
        self.reminders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(*task_id, trigger_at.clone());
        Ok(())
    }

    fn cancel(&self, task_id: &TaskId) -> Result<()> {
        self.reminders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(task_id);
        Ok(())
    }
}
