//! Task CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{
    params, types::Type, Connection, OptionalExtension, Row, TransactionBehavior,
};

use super::utils::{
    id_list_column, parse_column, parse_optional_column, require_non_empty, timestamp_column,
    zoned_column,
};
use crate::{
    error::{DatabaseResultExt, Result, TaskError},
    models::{Task, TaskFilter, TaskId, TaskStatus, UpdateTaskRequest},
};

const TASK_COLUMNS: &str = "id, title, notes, due_date, completed_at, status, priority, \
    is_recurring, recurrence_rule, recurrence_interval_days, reminder_date, created_at, \
    project_id, parent_id, subtask_ids, \
    (SELECT group_concat(tag_id) FROM task_tags WHERE task_tags.task_id = tasks.id) AS tag_ids";

const UPSERT_TASK_SQL: &str = "INSERT INTO tasks (id, title, notes, due_date, due_epoch, \
    completed_at, status, priority, is_recurring, recurrence_rule, recurrence_interval_days, \
    reminder_date, created_at, project_id, parent_id, subtask_ids) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16) \
    ON CONFLICT(id) DO UPDATE SET title = excluded.title, notes = excluded.notes, \
    due_date = excluded.due_date, due_epoch = excluded.due_epoch, \
    completed_at = excluded.completed_at, status = excluded.status, \
    priority = excluded.priority, is_recurring = excluded.is_recurring, \
    recurrence_rule = excluded.recurrence_rule, \
    recurrence_interval_days = excluded.recurrence_interval_days, \
    reminder_date = excluded.reminder_date, project_id = excluded.project_id, \
    parent_id = excluded.parent_id, subtask_ids = excluded.subtask_ids";
const DELETE_TASK_TAGS_SQL: &str = "DELETE FROM task_tags WHERE task_id = ?1";
const INSERT_TASK_TAG_SQL: &str = "INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?1, ?2)";
const CHECK_TASK_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1)";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const CHECK_TAG_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM tags WHERE id = ?1)";
const SELECT_SUBTASKS_SQL: &str = "SELECT subtask_ids FROM tasks WHERE id = ?1";
const UPDATE_SUBTASKS_SQL: &str = "UPDATE tasks SET subtask_ids = ?1 WHERE id = ?2";
const SELECT_PARENT_SQL: &str = "SELECT parent_id FROM tasks WHERE id = ?1";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_IDS_BY_PREFIX_SQL: &str = "SELECT id FROM tasks WHERE id LIKE ?1 || '%' LIMIT 2";

impl super::Database {
    /// Helper function to construct a Task from a row selected with
    /// `TASK_COLUMNS`.
    fn build_task_from_row(row: &Row) -> rusqlite::Result<Task> {
        let subtask_ids = match row.get::<_, Option<String>>(14)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(14, Type::Text, Box::new(e))
            })?,
            None => Vec::new(),
        };

        Ok(Task {
            id: parse_column(row, 0)?,
            title: row.get(1)?,
            notes: row.get(2)?,
            due_date: zoned_column(row, 3)?,
            completed_at: parse_optional_column(row, 4)?,
            status: parse_column(row, 5)?,
            priority: parse_column(row, 6)?,
            is_recurring: row.get(7)?,
            recurrence_rule: parse_column(row, 8)?,
            recurrence_interval_days: row.get(9)?,
            reminder_date: zoned_column(row, 10)?,
            created_at: timestamp_column(row, 11)?,
            project_id: row.get::<_, Option<i64>>(12)?.map(|id| id as u64),
            parent_id: parse_optional_column(row, 13)?,
            subtask_ids,
            tag_ids: id_list_column(row, 15)?,
        })
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: &TaskId) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id.to_string()], Self::build_task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Inserts a new task or overwrites the stored one with the same ID.
    ///
    /// Referenced project, tags and parent must exist. A task with a parent
    /// is added to the parent's subtask list.
    pub fn save_task(&mut self, task: &Task) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        write_task(&tx, task)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Creates a task after validating its title, returning the stored record.
    pub fn create_task(&mut self, task: &Task) -> Result<Task> {
        let mut task = task.clone();
        task.title = require_non_empty("title", &task.title)?;
        task.tag_ids.sort_unstable();
        task.tag_ids.dedup();

        if self.get_task(&task.id)?.is_some() {
            return Err(TaskError::invalid_input("id")
                .with_reason(format!("a task with ID {} already exists", task.id)));
        }

        self.save_task(&task)?;
        self.get_task(&task.id)?
            .ok_or_else(|| TaskError::task_not_found(&task.id))
    }

    /// Stores a completed task together with its next occurrence.
    ///
    /// Both writes happen in one transaction: either the completion and the
    /// successor are both persisted, or neither is.
    pub fn complete_task_with_successor(
        &mut self,
        completed: &Task,
        successor: Option<&Task>,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        write_task(&tx, completed)?;
        if let Some(next) = successor {
            write_task(&tx, next)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Applies a field-by-field update. Returns `None` if the task does not
    /// exist.
    pub fn update_task(&mut self, id: &TaskId, request: UpdateTaskRequest) -> Result<Option<Task>> {
        let Some(mut task) = self.get_task(id)? else {
            return Ok(None);
        };

        apply_update(&mut task, request, Timestamp::now())?;
        self.save_task(&task)?;

        self.get_task(id)
    }

    /// Deletes a task. Returns `false` if it did not exist.
    ///
    /// Tags and queued reminders go with it; children lose their parent link
    /// and the parent forgets the child.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<bool> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let parent: Option<String> = tx
            .query_row(SELECT_PARENT_SQL, params![id.to_string()], |row| {
                row.get::<_, Option<String>>(0)
            })
            .optional()
            .db_context("Failed to query task parent")?
            .flatten();

        if let Some(parent) = parent {
            let mut siblings = read_subtasks(&tx, &parent)?;
            siblings.retain(|child| child != id);
            store_subtasks(&tx, &parent, &siblings)?;
        }

        let rows = tx
            .execute(DELETE_TASK_SQL, params![id.to_string()])
            .db_context("Failed to delete task")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(rows > 0)
    }

    /// Lists tasks matching the filter, soonest due first.
    ///
    /// Tasks without a due date come last, ordered by creation time.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = format!("SELECT {TASK_COLUMNS} FROM tasks");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref title) = filter.title_contains {
            conditions.push("title LIKE ?");
            params_vec.push(Box::new(format!("%{title}%")));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        } else if !filter.include_completed {
            conditions.push("status NOT IN ('completed', 'cancelled')");
        }

        if let Some(project_id) = filter.project_id {
            conditions.push("project_id = ?");
            params_vec.push(Box::new(project_id as i64));
        }

        if let Some(tag_id) = filter.tag_id {
            conditions.push("id IN (SELECT task_id FROM task_tags WHERE tag_id = ?)");
            params_vec.push(Box::new(tag_id as i64));
        }

        if let Some(before) = filter.due_before {
            conditions.push("due_epoch < ?");
            params_vec.push(Box::new(before.as_second()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY due_epoch IS NULL, due_epoch, created_at");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read task row")?;

        Ok(tasks)
    }

    /// Resolves a full task ID or a unique prefix of one.
    pub fn resolve_task_id(&self, reference: &str) -> Result<TaskId> {
        let reference = reference.trim().to_lowercase();

        if let Ok(id) = reference.parse::<TaskId>() {
            return if self.task_exists(&id)? {
                Ok(id)
            } else {
                Err(TaskError::task_not_found(&id))
            };
        }

        if reference.is_empty() || !reference.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Err(TaskError::invalid_input("id")
                .with_reason(format!("'{reference}' is not a task ID or ID prefix")));
        }

        let mut stmt = self
            .connection
            .prepare(SELECT_IDS_BY_PREFIX_SQL)
            .db_context("Failed to prepare query")?;
        let matches = stmt
            .query_map(params![reference], |row| parse_column::<TaskId>(row, 0))
            .db_context("Failed to query task IDs")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read task ID")?;

        match matches.as_slice() {
            [] => Err(TaskError::TaskNotFound { id: reference }),
            [id] => Ok(*id),
            _ => {
                let count: usize = self
                    .connection
                    .query_row(
                        "SELECT COUNT(*) FROM tasks WHERE id LIKE ?1 || '%'",
                        params![reference],
                        |row| row.get::<_, i64>(0),
                    )
                    .db_context("Failed to count task IDs")? as usize;
                Err(TaskError::AmbiguousTaskId {
                    prefix: reference,
                    matches: count,
                })
            }
        }
    }

    /// Checks whether a task with this ID exists.
    pub fn task_exists(&self, id: &TaskId) -> Result<bool> {
        self.connection
            .query_row(CHECK_TASK_EXISTS_SQL, params![id.to_string()], |row| row.get(0))
            .db_context("Failed to check task existence")
    }
}

/// Upserts the task row, its tags, and its entry in the parent's subtask list.
fn write_task(conn: &Connection, task: &Task) -> Result<()> {
    ensure_references(conn, task)?;

    let id = task.id.to_string();
    let subtasks = if task.subtask_ids.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&task.subtask_ids)?)
    };

    conn.execute(
        UPSERT_TASK_SQL,
        params![
            &id,
            task.title,
            task.notes,
            task.due_date.as_ref().map(ToString::to_string),
            task.due_date.as_ref().map(|due| due.timestamp().as_second()),
            task.completed_at.map(|at| at.to_string()),
            task.status.as_str(),
            task.priority.as_str(),
            task.is_recurring,
            task.recurrence_rule.as_str(),
            task.recurrence_interval_days,
            task.reminder_date.as_ref().map(ToString::to_string),
            task.created_at.to_string(),
            task.project_id.map(|project| project as i64),
            task.parent_id.map(|parent| parent.to_string()),
            subtasks,
        ],
    )
    .db_context("Failed to save task")?;

    conn.execute(DELETE_TASK_TAGS_SQL, params![&id])
        .db_context("Failed to clear task tags")?;
    for tag_id in &task.tag_ids {
        conn.execute(INSERT_TASK_TAG_SQL, params![&id, *tag_id as i64])
            .db_context("Failed to attach tag")?;
    }

    if let Some(parent) = task.parent_id {
        let parent = parent.to_string();
        let mut siblings = read_subtasks(conn, &parent)?;
        if !siblings.contains(&task.id) {
            siblings.push(task.id);
            store_subtasks(conn, &parent, &siblings)?;
        }
    }

    Ok(())
}

/// Turns dangling project, tag or parent references into typed errors
/// instead of foreign key failures.
fn ensure_references(conn: &Connection, task: &Task) -> Result<()> {
    if let Some(project_id) = task.project_id {
        let exists: bool = conn
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| row.get(0))
            .db_context("Failed to check project existence")?;
        if !exists {
            return Err(TaskError::ProjectNotFound { id: project_id });
        }
    }

    for &tag_id in &task.tag_ids {
        let exists: bool = conn
            .query_row(CHECK_TAG_EXISTS_SQL, params![tag_id as i64], |row| row.get(0))
            .db_context("Failed to check tag existence")?;
        if !exists {
            return Err(TaskError::TagNotFound { id: tag_id });
        }
    }

    if let Some(parent) = task.parent_id {
        if parent == task.id {
            return Err(TaskError::invalid_input("parent").with_reason("a task cannot be its own parent"));
        }
        let exists: bool = conn
            .query_row(CHECK_TASK_EXISTS_SQL, params![parent.to_string()], |row| row.get(0))
            .db_context("Failed to check parent existence")?;
        if !exists {
            return Err(TaskError::task_not_found(&parent));
        }
    }

    Ok(())
}

fn read_subtasks(conn: &Connection, parent: &str) -> Result<Vec<TaskId>> {
    let json: Option<String> = conn
        .query_row(SELECT_SUBTASKS_SQL, params![parent], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()
        .db_context("Failed to query subtasks")?
        .flatten();
    match json {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

fn store_subtasks(conn: &Connection, parent: &str, subtasks: &[TaskId]) -> Result<()> {
    let json = if subtasks.is_empty() {
        None
    } else {
        Some(serde_json::to_string(subtasks)?)
    };
    conn.execute(UPDATE_SUBTASKS_SQL, params![json, parent])
        .db_context("Failed to update subtasks")?;
    Ok(())
}

/// Applies `request` to `task`, keeping `completed_at` in step with the
/// status.
pub(crate) fn apply_update(task: &mut Task, request: UpdateTaskRequest, now: Timestamp) -> Result<()> {
    if let Some(title) = request.title {
        task.title = require_non_empty("title", &title)?;
    }
    if let Some(notes) = request.notes {
        task.notes = notes;
    }
    if let Some(due) = request.due_date {
        task.due_date = due;
    }
    if let Some(reminder) = request.reminder_date {
        task.reminder_date = reminder;
    }
    if let Some(status) = request.status {
        if status == TaskStatus::Completed && task.status != TaskStatus::Completed {
            task.completed_at = Some(now);
        } else if status != TaskStatus::Completed {
            task.completed_at = None;
        }
        task.status = status;
    }
    if let Some(priority) = request.priority {
        task.priority = priority;
    }
    if let Some(recurring) = request.is_recurring {
        task.is_recurring = recurring;
    }
    if let Some(rule) = request.recurrence_rule {
        task.recurrence_rule = rule;
    }
    if let Some(interval) = request.recurrence_interval_days {
        task.recurrence_interval_days = interval;
    }
    if let Some(project) = request.project_id {
        task.project_id = project;
    }
    if let Some(mut tags) = request.tag_ids {
        tags.sort_unstable();
        tags.dedup();
        task.tag_ids = tags;
    }
    Ok(())
}
