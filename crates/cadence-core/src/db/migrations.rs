//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are per-connection in SQLite
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before subtasks were tracked lack the column
        let has_subtasks_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = 'subtask_ids'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_subtasks_column {
            log::info!("Migrating tasks table: adding subtask_ids column");
            self.connection
                .execute("ALTER TABLE tasks ADD COLUMN subtask_ids TEXT", [])
                .db_context("Failed to add subtask_ids column to tasks table")?;
        }

        Ok(())
    }
}
