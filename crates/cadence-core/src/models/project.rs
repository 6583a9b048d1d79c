//! Project and tag models.
//!
//! Tasks reference both by ID only; the recurrence engine copies the IDs
//! forward without interpreting them.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A named group of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub created_at: Timestamp,
}

/// A free-form label attachable to any number of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub created_at: Timestamp,
}
