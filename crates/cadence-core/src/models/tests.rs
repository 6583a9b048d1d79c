#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone, Timestamp, Zoned};

    use crate::{
        display::{CompletionResult, Every, Tasks},
        models::{
            Priority, RecurrenceRule, Task, TaskFilter, TaskId, TaskStatus, UpdateTaskRequest,
        },
        params::ListTasks,
    };

    fn due(y: i16, m: i8, d: i8) -> Zoned {
        date(y, m, d)
            .at(9, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid datetime")
    }

    fn create_test_task() -> Task {
        let mut task = Task::new("Water the plants");
        task.notes = Some("Use the blue can".to_string());
        task.due_date = Some(due(2024, 5, 10));
        task.priority = Priority::High;
        task.is_recurring = true;
        task.recurrence_rule = RecurrenceRule::Weekly;
        task.tag_ids = vec![1, 2];
        task.created_at = Timestamp::from_second(1704067200).unwrap(); // 2024-01-01 00:00:00 UTC
        task
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!("not-started".parse::<TaskStatus>(), Ok(TaskStatus::NotStarted));
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("Done".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert_eq!("canceled".parse::<TaskStatus>(), Ok(TaskStatus::Cancelled));
        assert!("finished".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_status_round_trips_through_as_str() {
        for status in [
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Postponed,
            TaskStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_open_statuses() {
        assert!(TaskStatus::NotStarted.is_open());
        assert!(TaskStatus::InProgress.is_open());
        assert!(TaskStatus::Postponed.is_open());
        assert!(!TaskStatus::Completed.is_open());
        assert!(!TaskStatus::Cancelled.is_open());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("med".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!(Priority::default(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_recurrence_rule_parsing() {
        assert_eq!("weekdays".parse::<RecurrenceRule>(), Ok(RecurrenceRule::Weekdays));
        assert_eq!("weekdays-only".parse::<RecurrenceRule>(), Ok(RecurrenceRule::Weekdays));
        assert_eq!("annually".parse::<RecurrenceRule>(), Ok(RecurrenceRule::Yearly));
        assert_eq!("never".parse::<RecurrenceRule>(), Ok(RecurrenceRule::None));
        assert!("fortnightly".parse::<RecurrenceRule>().is_err());
    }

    #[test]
    fn test_serde_spellings() {
        let json = serde_json::to_string(&TaskStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let json = serde_json::to_string(&RecurrenceRule::Weekdays).unwrap();
        assert_eq!(json, "\"weekdays\"");
        let json = serde_json::to_string(&Priority::Low).unwrap();
        assert_eq!(json, "\"low\"");
    }

    #[test]
    fn test_task_id_short_and_parse() {
        let id = TaskId::generate();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().starts_with(&short));
        assert_eq!(id.to_string().parse::<TaskId>().unwrap(), id);
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Fresh");
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.is_recurring);
        assert_eq!(task.recurrence_rule, RecurrenceRule::None);
        assert!(task.completed_at.is_none());
        assert_ne!(Task::new("Fresh").id, task.id);
    }

    #[test]
    fn test_is_overdue() {
        let task = create_test_task();
        let before = due(2024, 5, 9).timestamp();
        let after = due(2024, 5, 11).timestamp();

        assert!(!task.is_overdue(before));
        assert!(task.is_overdue(after));

        let mut done = task.clone();
        done.status = TaskStatus::Completed;
        assert!(!done.is_overdue(after));
    }

    #[test]
    fn test_task_display() {
        let task = create_test_task();
        let output = task.to_string();

        assert!(output.starts_with(&format!("# Water the plants ({})", task.id.short())));
        assert!(output.contains("- Status: ○ Not Started"));
        assert!(output.contains("- Priority: high"));
        assert!(output.contains("- Due: Fri 2024-05-10 09:00 UTC"));
        assert!(output.contains("- Repeats: weekly"));
        assert!(output.contains("- Tags: 1, 2"));
        assert!(output.contains("Use the blue can"));
        assert!(!output.contains("- Reminder:"));
    }

    #[test]
    fn test_custom_interval_display() {
        let mut task = create_test_task();
        task.recurrence_rule = RecurrenceRule::Custom;
        task.recurrence_interval_days = Some(14);
        assert!(task.to_string().contains("- Repeats: every 2 weeks"));

        assert_eq!(Every(1).to_string(), "every day");
        assert_eq!(Every(7).to_string(), "every week");
        assert_eq!(Every(30).to_string(), "every month");
        assert_eq!(Every(90).to_string(), "every 3 months");
        assert_eq!(Every(210).to_string(), "every 30 weeks");
        assert_eq!(Every(45).to_string(), "every 45 days");
    }

    #[test]
    fn test_tasks_list_display() {
        let mut done = Task::new("Filed taxes");
        done.status = TaskStatus::Completed;
        let tasks = Tasks(vec![create_test_task(), done]);
        let output = tasks.to_string();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("- [ ] **Water the plants**"));
        assert!(lines[0].contains("↻ weekly"));
        assert!(lines[1].starts_with("- [x] **Filed taxes**"));
    }

    #[test]
    fn test_completion_result_display() {
        let mut completed = create_test_task();
        completed.status = TaskStatus::Completed;

        let alone = CompletionResult {
            completed: completed.clone(),
            next: None,
        };
        assert!(alone.to_string().contains("No next occurrence could be scheduled."));

        let mut next = completed.clone();
        next.id = TaskId::generate();
        next.status = TaskStatus::NotStarted;
        let output = CompletionResult {
            completed,
            next: Some(next.clone()),
        }
        .to_string();
        assert!(output.contains(&format!("Next occurrence created with ID: {}", next.id.short())));
    }

    #[test]
    fn test_task_filter_from_list_tasks() {
        let params = ListTasks {
            all: true,
            status: Some(TaskStatus::Postponed),
            project_id: Some(3),
            tag_id: None,
            due_before: None,
            search: Some("plants".to_string()),
        };
        let filter = TaskFilter::from(&params);

        assert!(filter.include_completed);
        assert_eq!(filter.status, Some(TaskStatus::Postponed));
        assert_eq!(filter.project_id, Some(3));
        assert_eq!(filter.title_contains.as_deref(), Some("plants"));
    }

    #[test]
    fn test_update_request_describes_changes() {
        let request = UpdateTaskRequest {
            title: Some("Repot the plants".to_string()),
            notes: Some(None),
            recurrence_rule: Some(RecurrenceRule::Monthly),
            ..Default::default()
        };

        assert!(!request.is_empty());
        assert_eq!(
            request.describe_changes(),
            vec![
                "Updated title to 'Repot the plants'".to_string(),
                "Cleared notes".to_string(),
                "Changed recurrence rule to monthly".to_string(),
            ]
        );
        assert!(UpdateTaskRequest::default().is_empty());
    }
}
