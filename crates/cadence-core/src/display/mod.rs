//! Display formatting and result types.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get newtype wrappers so every interface prints them
//! the same way. All output is markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Task, Tag)    │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Tasks, Projects, Tags, Reminders
//! - [`results`]: CreateResult, UpdateResult, DeleteResult, CompletionResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime and ScheduledAt
//! - [`models`]: Display for the domain models, plus interval sugar
//!
//! ```rust
//! use cadence_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::Task,
//! };
//!
//! let task = Task::new("Book dentist");
//! let output = CreateResult::new(task.clone()).to_string();
//! assert!(output.contains("# Book dentist"));
//!
//! let changes = vec!["Updated title to 'Book dentist'".to_string()];
//! let output = UpdateResult::with_changes(task, changes).to_string();
//! assert!(output.contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Projects, Reminders, Tags, Tasks};
pub use datetime::{LocalDateTime, ScheduledAt};
pub use models::Every;
pub use results::{CompletionResult, CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
