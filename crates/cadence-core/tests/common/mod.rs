#![allow(dead_code)]

use cadence_core::{TaskManager, TaskManagerBuilder};
use jiff::{civil::date, tz::TimeZone, Zoned};
use tempfile::TempDir;

/// Helper function to create a test manager with the default SQLite reminder
/// queue
pub async fn create_test_manager() -> (TempDir, TaskManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = TaskManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create manager");
    (temp_dir, manager)
}

/// A UTC wall-clock time
pub fn utc(y: i16, m: i8, d: i8, h: i8, min: i8) -> Zoned {
    date(y, m, d)
        .at(h, min, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid datetime")
}
