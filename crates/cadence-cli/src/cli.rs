//! Command-line argument definitions using clap.
//!
//! Each command has a clap `Args` struct converted into the matching core
//! parameter type, so clap never leaks into `cadence-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskManager
//! ```
//!
//! Dates and durations are parsed here (see [`crate::dates`]); everything
//! the core can validate, such as non-empty titles, is left to the core.

use anyhow::{anyhow, Result};
use cadence_core::{
    params::{
        CreateProject, CreateTag, CreateTask, DeleteTask, Id, ListReminders, ListTasks, TaskRef,
        UpdateTask,
    },
    Priority, RecurrenceRule, TaskStatus, UpdateTaskRequest,
};
use clap::{Args, Subcommand, ValueEnum};
use jiff::{SignedDuration, Timestamp, Zoned};

use crate::dates::{parse_instant, parse_lead_time, parse_when};

// ============================================================================
// Tasks
// ============================================================================

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Due date, e.g. 2024-05-10, 2024-05-10T09:00 or
    /// 2024-05-10T09:00[Europe/Paris]
    #[arg(short, long, value_parser = parse_when)]
    pub due: Option<Zoned>,
    /// When to be reminded, same formats as --due
    #[arg(long, value_parser = parse_when, conflicts_with = "remind_before")]
    pub reminder: Option<Zoned>,
    /// Remind this long before the due date, e.g. 15m or 1h 30m
    #[arg(long, value_parser = parse_lead_time, requires = "due")]
    pub remind_before: Option<SignedDuration>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// How the task repeats once completed
    #[arg(short, long, value_enum)]
    pub repeat: Option<RepeatArg>,
    /// Interval for --repeat custom
    #[arg(long, required_if_eq("repeat", "custom"))]
    pub every_days: Option<u32>,
    /// Project ID
    #[arg(long)]
    pub project: Option<u64>,
    /// Tag ID, repeatable
    #[arg(long = "tag")]
    pub tags: Vec<u64>,
    /// Parent task ID or prefix
    #[arg(long)]
    pub parent: Option<String>,
}

impl TryFrom<AddTaskArgs> for CreateTask {
    type Error = anyhow::Error;

    fn try_from(val: AddTaskArgs) -> Result<Self> {
        let reminder_date = match (val.reminder, val.remind_before, &val.due) {
            (Some(reminder), _, _) => Some(reminder),
            (None, Some(lead), Some(due)) => Some(
                due.checked_sub(lead)
                    .map_err(|e| anyhow!("Reminder time is out of range: {e}"))?,
            ),
            _ => None,
        };

        Ok(CreateTask {
            title: val.title,
            notes: val.notes,
            due_date: val.due,
            reminder_date,
            priority: val.priority.map(Into::into).unwrap_or_default(),
            recurrence_rule: val.repeat.map(Into::into).unwrap_or_default(),
            recurrence_interval_days: val.every_days,
            project_id: val.project,
            tag_ids: val.tags,
            parent: val.parent,
        })
    }
}

/// List tasks
///
/// Shows open tasks, soonest due first. Completed and cancelled tasks are
/// hidden unless --all or a --status filter is given.
#[derive(Args)]
pub struct ListTasksArgs {
    /// Include completed and cancelled tasks
    #[arg(short, long)]
    pub all: bool,
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    /// Only tasks in this project
    #[arg(long)]
    pub project: Option<u64>,
    /// Only tasks with this tag
    #[arg(long)]
    pub tag: Option<u64>,
    /// Only tasks due before this date
    #[arg(long, value_parser = parse_instant)]
    pub due_before: Option<Timestamp>,
    /// Case-insensitive title search
    #[arg(long)]
    pub search: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            all: val.all,
            status: val.status.map(Into::into),
            project_id: val.project,
            tag_id: val.tag,
            due_before: val.due_before,
            search: val.search,
        }
    }
}

/// A task ID or unique prefix
#[derive(Args)]
pub struct TaskRefArgs {
    /// Task ID, or enough of its start to be unique
    pub id: String,
}

impl From<TaskRefArgs> for TaskRef {
    fn from(val: TaskRefArgs) -> Self {
        TaskRef { id: val.id }
    }
}

/// Update a task
///
/// Only the given fields change. Use `task done` to complete a task so that
/// recurring tasks get their next occurrence.
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// Task ID or prefix
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
    #[arg(short, long, value_parser = parse_when, conflicts_with = "clear_due")]
    pub due: Option<Zoned>,
    #[arg(long)]
    pub clear_due: bool,
    #[arg(long, value_parser = parse_when, conflicts_with = "clear_reminder")]
    pub reminder: Option<Zoned>,
    #[arg(long)]
    pub clear_reminder: bool,
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum)]
    pub repeat: Option<RepeatArg>,
    #[arg(long)]
    pub every_days: Option<u32>,
    #[arg(long, conflicts_with = "no_project")]
    pub project: Option<u64>,
    /// Remove the task from its project
    #[arg(long)]
    pub no_project: bool,
    /// Replace the tags with these tag IDs
    #[arg(long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<u64>,
    #[arg(long)]
    pub clear_tags: bool,
}

/// `Some(None)` when cleared, `Some(Some(v))` when set, `None` otherwise.
fn set_or_clear<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        let tag_ids = if val.clear_tags {
            Some(Vec::new())
        } else if val.tags.is_empty() {
            None
        } else {
            Some(val.tags)
        };

        UpdateTask {
            id: val.id,
            changes: UpdateTaskRequest {
                title: val.title,
                notes: set_or_clear(val.notes, val.clear_notes),
                due_date: set_or_clear(val.due, val.clear_due),
                reminder_date: set_or_clear(val.reminder, val.clear_reminder),
                status: val.status.map(Into::into),
                priority: val.priority.map(Into::into),
                is_recurring: None,
                recurrence_rule: val.repeat.map(Into::into),
                recurrence_interval_days: val.every_days.map(Some),
                project_id: set_or_clear(val.project, val.no_project),
                tag_ids,
            },
        }
    }
}

/// Delete a task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// Task ID or prefix
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTaskArgs> for DeleteTask {
    fn from(val: DeleteTaskArgs) -> Self {
        DeleteTask {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a task
    #[command(alias = "s")]
    Show(TaskRefArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Complete a task, creating the next occurrence if it repeats
    #[command(aliases = ["d", "complete"])]
    Done(TaskRefArgs),
    /// Delete a task permanently
    #[command(alias = "rm")]
    Delete(DeleteTaskArgs),
}

// ============================================================================
// Projects, tags and reminders
// ============================================================================

/// Name of a new project or tag
#[derive(Args)]
pub struct NameArgs {
    pub name: String,
}

impl From<NameArgs> for CreateProject {
    fn from(val: NameArgs) -> Self {
        CreateProject { name: val.name }
    }
}

impl From<NameArgs> for CreateTag {
    fn from(val: NameArgs) -> Self {
        CreateTag { name: val.name }
    }
}

/// A project or tag ID
#[derive(Args)]
pub struct IdArgs {
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project
    #[command(alias = "a")]
    Add(NameArgs),
    /// List projects
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a project; its tasks are kept
    #[command(alias = "rm")]
    Delete(IdArgs),
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Create a tag
    #[command(alias = "a")]
    Add(NameArgs),
    /// List tags
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a tag and remove it from all tasks
    #[command(alias = "rm")]
    Delete(IdArgs),
}

/// List queued reminders
#[derive(Args)]
pub struct ListRemindersArgs {
    /// Only reminders triggering before this date
    #[arg(long, value_parser = parse_instant)]
    pub before: Option<Timestamp>,
}

impl From<ListRemindersArgs> for ListReminders {
    fn from(val: ListRemindersArgs) -> Self {
        ListReminders { before: val.before }
    }
}

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// List queued reminders, soonest first
    #[command(aliases = ["l", "ls"])]
    List(ListRemindersArgs),
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
}

impl From<StatusArg> for TaskStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::NotStarted => TaskStatus::NotStarted,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Completed => TaskStatus::Completed,
            StatusArg::Postponed => TaskStatus::Postponed,
            StatusArg::Cancelled => TaskStatus::Cancelled,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Recurrence rule as typed on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RepeatArg {
    /// Stop repeating
    None,
    Daily,
    /// Monday to Friday
    Weekdays,
    Weekly,
    /// Same day each month, clamped to shorter months
    Monthly,
    Yearly,
    /// Every --every-days days
    Custom,
}

impl From<RepeatArg> for RecurrenceRule {
    fn from(val: RepeatArg) -> Self {
        match val {
            RepeatArg::None => RecurrenceRule::None,
            RepeatArg::Daily => RecurrenceRule::Daily,
            RepeatArg::Weekdays => RecurrenceRule::Weekdays,
            RepeatArg::Weekly => RecurrenceRule::Weekly,
            RepeatArg::Monthly => RecurrenceRule::Monthly,
            RepeatArg::Yearly => RecurrenceRule::Yearly,
            RepeatArg::Custom => RecurrenceRule::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args as CadenceArgs, Commands};

    fn parse_add(extra: &[&str]) -> CreateTask {
        let mut argv = vec!["cadence", "task", "add", "Stand-up"];
        argv.extend_from_slice(extra);
        match CadenceArgs::try_parse_from(argv).unwrap().command {
            Some(Commands::Task {
                command: TaskCommands::Add(args),
            }) => CreateTask::try_from(args).unwrap(),
            _ => panic!("expected task add"),
        }
    }

    #[test]
    fn test_remind_before_is_relative_to_due_date() {
        let params = parse_add(&["--due", "2024-05-10T09:00[UTC]", "--remind-before", "15m"]);
        let due = params.due_date.expect("due date");
        let reminder = params.reminder_date.expect("reminder");
        assert_eq!(due.timestamp().duration_since(reminder.timestamp()).as_secs(), 900);
    }

    #[test]
    fn test_add_maps_repeat_and_tags() {
        let params = parse_add(&[
            "--repeat", "weekdays", "--tag", "1", "--tag", "2", "--priority", "high",
        ]);
        assert_eq!(params.recurrence_rule, RecurrenceRule::Weekdays);
        assert_eq!(params.tag_ids, vec![1, 2]);
        assert_eq!(params.priority, Priority::High);
    }

    #[test]
    fn test_update_clear_flags() {
        let argv = [
            "cadence", "task", "update", "abcd", "--clear-reminder", "--no-project", "--clear-tags",
        ];
        let update = match CadenceArgs::try_parse_from(argv).unwrap().command {
            Some(Commands::Task {
                command: TaskCommands::Update(args),
            }) => UpdateTask::from(args),
            _ => panic!("expected task update"),
        };
        assert_eq!(update.id, "abcd");
        assert_eq!(update.changes.reminder_date, Some(None));
        assert_eq!(update.changes.project_id, Some(None));
        assert_eq!(update.changes.tag_ids, Some(Vec::new()));
        assert!(update.changes.title.is_none());
        assert!(update.changes.due_date.is_none());
    }

    #[test]
    fn test_status_names() {
        assert!(StatusArg::from_str("in-progress", false).is_ok());
        assert!(StatusArg::from_str("not-started", false).is_ok());
    }
}
