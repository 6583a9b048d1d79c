mod common;

use cadence_core::{
    params::{CreateTask, DeleteTask, ListReminders, ListTasks, TaskRef, UpdateTask},
    RecurrenceRule, TaskManagerBuilder, TaskStatus, UpdateTaskRequest,
};
use common::{create_test_manager, utc};
use tempfile::TempDir;

#[tokio::test]
async fn test_recurring_workflow_with_reminder_queue() {
    let (_temp_dir, manager) = create_test_manager().await;

    let task = manager
        .create_task(&CreateTask {
            title: "Pay rent".to_string(),
            due_date: Some(utc(2024, 1, 31, 10, 0)),
            reminder_date: Some(utc(2024, 1, 30, 10, 0)),
            recurrence_rule: RecurrenceRule::Monthly,
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let queued = manager
        .pending_reminders(&ListReminders::default())
        .await
        .expect("Failed to list reminders");
    assert_eq!(queued.len(), 1);
    assert_eq!(queued.0[0].task_id, task.id);

    // January 31st clamps to the leap day
    let outcome = manager
        .complete_task(&TaskRef::new(task.id.to_string()))
        .await
        .expect("Failed to complete task");
    let february = outcome.next.expect("monthly task recurs");
    assert_eq!(february.due_date, Some(utc(2024, 2, 29, 10, 0)));
    assert_eq!(february.reminder_date, Some(utc(2024, 2, 28, 10, 0)));

    let queued = manager
        .pending_reminders(&ListReminders::default())
        .await
        .unwrap();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued.0[0].task_id, february.id);
    assert_eq!(queued.0[0].trigger_at, utc(2024, 2, 28, 10, 0));

    // The clamped day does not stick: March goes back to the 29th of the
    // previous due date, not the original 31st
    let march = manager
        .complete_task(&TaskRef::new(february.id.to_string()))
        .await
        .unwrap()
        .next
        .expect("monthly task recurs");
    assert_eq!(march.due_date, Some(utc(2024, 3, 29, 10, 0)));

    let open = manager.list_tasks(&ListTasks::default()).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, march.id);

    let history = manager
        .list_tasks(&ListTasks {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_pending_reminders_before_cutoff() {
    let (_temp_dir, manager) = create_test_manager().await;

    for (title, day) in [("Soon", 1), ("Later", 20)] {
        manager
            .create_task(&CreateTask {
                title: title.to_string(),
                reminder_date: Some(utc(2024, 5, day, 8, 0)),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let soon = manager
        .pending_reminders(&ListReminders {
            before: Some(utc(2024, 5, 10, 0, 0).timestamp()),
        })
        .await
        .unwrap();
    assert_eq!(soon.len(), 1);
    assert_eq!(soon.0[0].task_title, "Soon");
}

#[tokio::test]
async fn test_delete_removes_queued_reminder() {
    let (_temp_dir, manager) = create_test_manager().await;

    let task = manager
        .create_task(&CreateTask {
            title: "Call the bank".to_string(),
            reminder_date: Some(utc(2024, 5, 1, 9, 0)),
            ..Default::default()
        })
        .await
        .unwrap();

    manager
        .delete_task(&DeleteTask {
            id: task.id.short(),
            confirmed: true,
        })
        .await
        .unwrap()
        .expect("task existed");

    let queued = manager
        .pending_reminders(&ListReminders::default())
        .await
        .unwrap();
    assert!(queued.is_empty());
}

#[tokio::test]
async fn test_clearing_reminder_dequeues_it() {
    let (_temp_dir, manager) = create_test_manager().await;

    let task = manager
        .create_task(&CreateTask {
            title: "Stand-up".to_string(),
            due_date: Some(utc(2024, 5, 1, 9, 0)),
            reminder_date: Some(utc(2024, 5, 1, 8, 55)),
            recurrence_rule: RecurrenceRule::Weekdays,
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = manager
        .update_task(&UpdateTask {
            id: task.id.to_string(),
            changes: UpdateTaskRequest {
                reminder_date: Some(None),
                ..Default::default()
            },
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.reminder_date, None);

    let queued = manager
        .pending_reminders(&ListReminders::default())
        .await
        .unwrap();
    assert!(queued.is_empty());
}

#[tokio::test]
async fn test_manager_reopens_existing_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("cadence.db");

    let first = TaskManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("builder creates missing directories");
    let task = first
        .create_task(&CreateTask {
            title: "Survives restarts".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    drop(first);

    let second = TaskManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let stored = second
        .get_task(&TaskRef::new(task.id.to_string()))
        .await
        .unwrap()
        .expect("task persisted");
    assert_eq!(stored.title, "Survives restarts");
    assert_eq!(second.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_concurrent_creates() {
    let (_temp_dir, manager) = create_test_manager().await;
    let manager = std::sync::Arc::new(manager);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = std::sync::Arc::clone(&manager);
            tokio::spawn(async move {
                manager
                    .create_task(&CreateTask {
                        title: format!("Task {i}"),
                        ..Default::default()
                    })
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("join").expect("create");
    }

    let all = manager.list_tasks(&ListTasks::default()).await.unwrap();
    assert_eq!(all.len(), 8);
}
