//! Reminder queue storage.

use jiff::{Timestamp, Zoned};
use rusqlite::{params, OptionalExtension};

use super::utils::parse_column;
use crate::{
    error::{DatabaseResultExt, Result, TaskError},
    models::{Reminder, TaskId},
};

const UPSERT_REMINDER_SQL: &str = "INSERT INTO reminders (task_id, trigger_at, trigger_epoch, created_at) \
    VALUES (?1, ?2, ?3, ?4) \
    ON CONFLICT(task_id) DO UPDATE SET trigger_at = excluded.trigger_at, \
    trigger_epoch = excluded.trigger_epoch, created_at = excluded.created_at";
const SELECT_TRIGGER_SQL: &str = "SELECT trigger_at FROM reminders WHERE task_id = ?1";
const DELETE_REMINDER_SQL: &str = "DELETE FROM reminders WHERE task_id = ?1";
const SELECT_REMINDERS_SQL: &str = "SELECT r.task_id, t.title, r.trigger_at FROM reminders r \
    JOIN tasks t ON t.id = r.task_id";

impl super::Database {
    /// Queues (or moves) the reminder for a task.
    ///
    /// The task must already be stored; reminders never point at tasks that
    /// are missing from the database.
    pub fn upsert_reminder(&mut self, task_id: &TaskId, trigger_at: &Zoned) -> Result<()> {
        if !self.task_exists(task_id)? {
            return Err(TaskError::task_not_found(task_id));
        }

        self.connection
            .execute(
                UPSERT_REMINDER_SQL,
                params![
                    task_id.to_string(),
                    trigger_at.to_string(),
                    trigger_at.timestamp().as_second(),
                    Timestamp::now().to_string(),
                ],
            )
            .db_context("Failed to schedule reminder")?;
        Ok(())
    }

    /// Removes the queued reminder for a task. Returns `false` if there was
    /// none.
    pub fn delete_reminder(&mut self, task_id: &TaskId) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_REMINDER_SQL, params![task_id.to_string()])
            .db_context("Failed to cancel reminder")?;
        Ok(rows > 0)
    }

    /// Lists queued reminders by trigger time, optionally only those
    /// triggering at or before `before`.
    pub fn list_reminders(&self, before: Option<Timestamp>) -> Result<Vec<Reminder>> {
        let mut query = SELECT_REMINDERS_SQL.to_string();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(before) = before {
            query.push_str(" WHERE r.trigger_epoch <= ?");
            params_vec.push(Box::new(before.as_second()));
        }
        query.push_str(" ORDER BY r.trigger_epoch, t.title");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let reminders = stmt
            .query_map(&params_refs[..], |row| {
                Ok(Reminder {
                    task_id: parse_column(row, 0)?,
                    task_title: row.get(1)?,
                    trigger_at: parse_column(row, 2)?,
                })
            })
            .db_context("Failed to query reminders")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read reminder row")?;

        Ok(reminders)
    }

    /// Returns the queued trigger time for a task, if any.
    pub fn get_reminder(&self, task_id: &TaskId) -> Result<Option<Zoned>> {
        self.connection
            .query_row(
                SELECT_TRIGGER_SQL,
                params![task_id.to_string()],
                |row| parse_column(row, 0),
            )
            .optional()
            .db_context("Failed to query reminder")
    }
}
