//! Database operations and SQLite management for tasks, projects, tags and
//! reminders.
//!
//! This module provides the low-level persistence layer of Cadence. It owns
//! the SQLite connection and schema, and exposes query methods grouped by
//! entity in the submodules. [`Database`] also implements [`TaskStore`], the
//! minimal fetch/save/delete contract the rest of the application relies on.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Task, TaskId},
};

pub mod migrations;
pub mod project_queries;
pub mod reminder_queries;
pub mod task_queries;
pub mod utils;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        // Each manager operation opens its own connection; writers wait for each other
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful in tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Fetch/save/delete access to task records by identifier.
pub trait TaskStore {
    /// Fetches a task, or `None` if no task has this ID.
    fn get(&self, id: &TaskId) -> Result<Option<Task>>;

    /// Inserts the task, or replaces the stored record with the same ID.
    fn save(&mut self, task: &Task) -> Result<()>;

    /// Removes the task. Deleting an unknown ID is not an error.
    fn delete(&mut self, id: &TaskId) -> Result<()>;
}

impl TaskStore for Database {
    fn get(&self, id: &TaskId) -> Result<Option<Task>> {
        self.get_task(id)
    }

    fn save(&mut self, task: &Task) -> Result<()> {
        self.save_task(task)
    }

    fn delete(&mut self, id: &TaskId) -> Result<()> {
        self.delete_task(id).map(|_| ())
    }
}
