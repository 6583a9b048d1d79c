//! Project and tag CRUD operations.
//!
//! Projects and tags share the same shape (an auto-incremented ID and a
//! unique name), so both are served by the same statements parameterized on
//! the table name.

use jiff::Timestamp;
use rusqlite::{params, ErrorCode, OptionalExtension, Row, TransactionBehavior};

use super::utils::{require_non_empty, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, TaskError},
    models::{Project, Tag},
};

#[derive(Clone, Copy)]
enum Label {
    Project,
    Tag,
}

impl Label {
    fn table(self) -> &'static str {
        match self {
            Label::Project => "projects",
            Label::Tag => "tags",
        }
    }

    fn field(self) -> &'static str {
        match self {
            Label::Project => "project",
            Label::Tag => "tag",
        }
    }
}

fn read_label(row: &Row) -> rusqlite::Result<(u64, String, Timestamp)> {
    Ok((
        row.get::<_, i64>(0)? as u64,
        row.get(1)?,
        timestamp_column(row, 2)?,
    ))
}

impl super::Database {
    fn insert_label(&mut self, label: Label, name: &str) -> Result<(u64, String, Timestamp)> {
        let name = require_non_empty(label.field(), name)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let sql = format!(
            "INSERT INTO {} (name, created_at) VALUES (?1, ?2)",
            label.table()
        );
        tx.execute(&sql, params![&name, now.to_string()])
            .map_err(|e| match e.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => TaskError::invalid_input(label.field())
                    .with_reason(format!("a {} named '{name}' already exists", label.field())),
                _ => TaskError::database(format!("Failed to insert {}", label.field()))
                    .with_source(e),
            })?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok((id, name, now))
    }

    fn select_label(&self, label: Label, id: u64) -> Result<Option<(u64, String, Timestamp)>> {
        let sql = format!(
            "SELECT id, name, created_at FROM {} WHERE id = ?1",
            label.table()
        );
        self.connection
            .query_row(&sql, params![id as i64], read_label)
            .optional()
            .db_context("Failed to query label")
    }

    fn select_labels(&self, label: Label) -> Result<Vec<(u64, String, Timestamp)>> {
        let sql = format!(
            "SELECT id, name, created_at FROM {} ORDER BY name COLLATE NOCASE",
            label.table()
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map([], read_label)
            .db_context("Failed to query labels")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read label row")?;
        Ok(rows)
    }

    fn remove_label(&mut self, label: Label, id: u64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", label.table());
        let rows = self
            .connection
            .execute(&sql, params![id as i64])
            .db_context("Failed to delete label")?;
        Ok(rows > 0)
    }

    /// Creates a project with a unique, non-empty name.
    pub fn create_project(&mut self, name: &str) -> Result<Project> {
        let (id, name, created_at) = self.insert_label(Label::Project, name)?;
        Ok(Project {
            id,
            name,
            created_at,
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        Ok(self
            .select_label(Label::Project, id)?
            .map(|(id, name, created_at)| Project {
                id,
                name,
                created_at,
            }))
    }

    /// Lists all projects by name.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self
            .select_labels(Label::Project)?
            .into_iter()
            .map(|(id, name, created_at)| Project {
                id,
                name,
                created_at,
            })
            .collect())
    }

    /// Deletes a project; its tasks stay, without a project.
    pub fn delete_project(&mut self, id: u64) -> Result<bool> {
        self.remove_label(Label::Project, id)
    }

    /// Creates a tag with a unique, non-empty name.
    pub fn create_tag(&mut self, name: &str) -> Result<Tag> {
        let (id, name, created_at) = self.insert_label(Label::Tag, name)?;
        Ok(Tag {
            id,
            name,
            created_at,
        })
    }

    /// Retrieves a tag by its ID.
    pub fn get_tag(&self, id: u64) -> Result<Option<Tag>> {
        Ok(self
            .select_label(Label::Tag, id)?
            .map(|(id, name, created_at)| Tag {
                id,
                name,
                created_at,
            }))
    }

    /// Lists all tags by name.
    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self
            .select_labels(Label::Tag)?
            .into_iter()
            .map(|(id, name, created_at)| Tag {
                id,
                name,
                created_at,
            })
            .collect())
    }

    /// Deletes a tag and detaches it from every task.
    pub fn delete_tag(&mut self, id: u64) -> Result<bool> {
        self.remove_label(Label::Tag, id)
    }
}
