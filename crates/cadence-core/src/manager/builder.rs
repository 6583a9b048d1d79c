//! Builder for creating and configuring TaskManager instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::TaskManager;
use crate::{
    db::Database,
    error::{Result, TaskError},
    reminders::{ReminderScheduler, SqliteReminderScheduler},
};

/// Builder for creating and configuring TaskManager instances.
#[derive(Clone, Default)]
pub struct TaskManagerBuilder {
    database_path: Option<PathBuf>,
    scheduler: Option<Arc<dyn ReminderScheduler>>,
}

impl TaskManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cadence/cadence.db` or
    /// `~/.local/share/cadence/cadence.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the scheduler that receives reminders.
    ///
    /// Defaults to a [`SqliteReminderScheduler`] on the manager's database.
    pub fn with_reminder_scheduler(mut self, scheduler: Arc<dyn ReminderScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Builds the configured manager, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::FileSystem` if the database directory cannot be
    /// created, `TaskError::XdgDirectory` if no default location can be
    /// determined, and `TaskError::Database` if initialization fails.
    pub async fn build(self) -> Result<TaskManager> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TaskError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(TaskError::join)??;
        log::debug!("Using task database at {}", db_path.display());

        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(SqliteReminderScheduler::new(&db_path)));

        Ok(TaskManager::new(db_path, scheduler))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .place_data_file("cadence.db")
            .map_err(|e| TaskError::XdgDirectory(e.to_string()))
    }
}
