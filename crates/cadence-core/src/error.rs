//! Error types for the task library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskId;

/// Comprehensive error type for all task operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: String },
    /// A task ID prefix matched more than one task
    #[error("Task ID prefix '{prefix}' is ambiguous ({matches} tasks match)")]
    AmbiguousTaskId { prefix: String, matches: usize },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Tag not found for the given ID
    #[error("Tag with ID {id} not found")]
    TagNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Calendar arithmetic or time zone errors
    #[error("Date/time error: {source}")]
    DateTime {
        #[from]
        source: jiff::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TaskError {
        TaskError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TaskError {
        TaskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a task.
    pub fn task_not_found(id: &TaskId) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TaskError::database(message).with_source(e))
    }
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;
