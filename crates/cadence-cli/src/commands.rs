//! Command handlers: run a parsed command against the task manager and
//! render the outcome.

use anyhow::{anyhow, Context, Result};
use cadence_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        CreateProject, CreateTag, CreateTask, DeleteTask, Id, ListReminders, ListTasks, TaskRef,
        UpdateTask,
    },
    TaskManager, UpdateTaskRequest,
};
use log::debug;

use crate::{
    cli::{ProjectCommands, ReminderCommands, TagCommands, TaskCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    manager: TaskManager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: TaskManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let params = CreateTask::try_from(args)?;
                debug!("create_task: {params:?}");
                let task = self
                    .manager
                    .create_task(&params)
                    .await
                    .context("Failed to create task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => self.list_tasks(&ListTasks::from(args)).await,
            TaskCommands::Show(args) => {
                let params = TaskRef::from(args);
                let task = self
                    .manager
                    .get_task(&params)
                    .await
                    .context("Failed to get task")?
                    .ok_or_else(|| not_found("Task", &params.id))?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Update(args) => {
                let params = UpdateTask::from(args);
                debug!("update_task: {params:?}");
                let task = self
                    .manager
                    .update_task(&params)
                    .await
                    .context("Failed to update task")?
                    .ok_or_else(|| not_found("Task", &params.id))?;
                let changes = describe_changes(&params.changes);
                self.renderer
                    .render(&UpdateResult::with_changes(task, changes).to_string())
            }
            TaskCommands::Done(args) => {
                let params = TaskRef::from(args);
                let outcome = self
                    .manager
                    .complete_task(&params)
                    .await
                    .context("Failed to complete task")?;
                self.renderer.render(&outcome.to_string())
            }
            TaskCommands::Delete(args) => {
                let params = DeleteTask::from(args);
                if !params.confirmed {
                    let status = OperationStatus::failure(format!(
                        "Deleting task {} is permanent. Re-run with --confirm to proceed.",
                        params.id
                    ));
                    return Err(anyhow!(status.message));
                }
                let task = self
                    .manager
                    .delete_task(&params)
                    .await
                    .context("Failed to delete task")?
                    .ok_or_else(|| not_found("Task", &params.id))?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
        }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Add(args) => {
                let project = self
                    .manager
                    .create_project(&CreateProject::from(args))
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List => {
                let projects = self
                    .manager
                    .list_projects()
                    .await
                    .context("Failed to list projects")?;
                if projects.is_empty() {
                    return self.renderer.render(&projects.to_string());
                }
                self.renderer.render(&format!("# Projects\n\n{projects}"))
            }
            ProjectCommands::Delete(args) => {
                let params = Id::from(args);
                let project = self
                    .manager
                    .delete_project(&params)
                    .await
                    .context("Failed to delete project")?
                    .ok_or_else(|| not_found("Project", params.id))?;
                self.renderer.render(&DeleteResult::new(project).to_string())
            }
        }
    }

    pub async fn handle_tag_command(&self, command: TagCommands) -> Result<()> {
        match command {
            TagCommands::Add(args) => {
                let tag = self
                    .manager
                    .create_tag(&CreateTag::from(args))
                    .await
                    .context("Failed to create tag")?;
                self.renderer.render(&CreateResult::new(tag).to_string())
            }
            TagCommands::List => {
                let tags = self
                    .manager
                    .list_tags()
                    .await
                    .context("Failed to list tags")?;
                if tags.is_empty() {
                    return self.renderer.render(&tags.to_string());
                }
                self.renderer.render(&format!("# Tags\n\n{tags}"))
            }
            TagCommands::Delete(args) => {
                let params = Id::from(args);
                let tag = self
                    .manager
                    .delete_tag(&params)
                    .await
                    .context("Failed to delete tag")?
                    .ok_or_else(|| not_found("Tag", params.id))?;
                self.renderer.render(&DeleteResult::new(tag).to_string())
            }
        }
    }

    pub async fn handle_reminder_command(&self, command: ReminderCommands) -> Result<()> {
        match command {
            ReminderCommands::List(args) => {
                let reminders = self
                    .manager
                    .pending_reminders(&ListReminders::from(args))
                    .await
                    .context("Failed to list reminders")?;
                if reminders.is_empty() {
                    return self.renderer.render(&reminders.to_string());
                }
                self.renderer
                    .render(&format!("# Pending Reminders\n\n{reminders}"))
            }
        }
    }

    pub async fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        debug!("list_tasks: {params:?}");
        let tasks = self
            .manager
            .list_tasks(params)
            .await
            .context("Failed to list tasks")?;

        if tasks.is_empty() {
            return self.renderer.render(&tasks.to_string());
        }

        let title = match (params.status, params.all) {
            (Some(status), _) => format!("Tasks: {status}"),
            (None, true) => "All Tasks".to_string(),
            (None, false) => "Open Tasks".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{tasks}"))
    }
}

fn not_found(kind: &str, id: impl std::fmt::Display) -> anyhow::Error {
    anyhow!(OperationStatus::not_found(kind, id).message)
}

/// One line per field the request touches, for the update summary.
fn describe_changes(changes: &UpdateTaskRequest) -> Vec<String> {
    fn set_or_cleared<T>(field: &str, value: Option<&Option<T>>) -> Option<String> {
        match value? {
            Some(_) => Some(format!("Updated {field}")),
            None => Some(format!("Cleared {field}")),
        }
    }

    let mut lines = Vec::new();
    if let Some(title) = &changes.title {
        lines.push(format!("Updated title to '{title}'"));
    }
    lines.extend(set_or_cleared("notes", changes.notes.as_ref()));
    lines.extend(set_or_cleared("due date", changes.due_date.as_ref()));
    lines.extend(set_or_cleared("reminder", changes.reminder_date.as_ref()));
    if let Some(status) = changes.status {
        lines.push(format!("Set status to {status}"));
    }
    if let Some(priority) = changes.priority {
        lines.push(format!("Set priority to {priority}"));
    }
    if let Some(rule) = changes.recurrence_rule {
        lines.push(format!("Set repeat to {rule}"));
    }
    if let Some(Some(days)) = changes.recurrence_interval_days {
        lines.push(format!("Set interval to {days} days"));
    }
    lines.extend(set_or_cleared("project", changes.project_id.as_ref()));
    match &changes.tag_ids {
        Some(tags) if tags.is_empty() => lines.push("Cleared tags".to_string()),
        Some(tags) => lines.push(format!("Set tags to {tags:?}")),
        None => {}
    }
    lines
}

#[cfg(test)]
mod tests {
    use cadence_core::{RecurrenceRule, TaskStatus};

    use super::*;

    #[test]
    fn test_describe_changes() {
        let changes = UpdateTaskRequest {
            title: Some("Water plants".to_string()),
            reminder_date: Some(None),
            status: Some(TaskStatus::InProgress),
            recurrence_rule: Some(RecurrenceRule::Weekly),
            tag_ids: Some(Vec::new()),
            ..Default::default()
        };

        let lines = describe_changes(&changes);
        assert_eq!(lines[0], "Updated title to 'Water plants'");
        assert_eq!(lines[1], "Cleared reminder");
        assert!(lines.iter().any(|l| l.starts_with("Set status to")));
        assert!(lines.iter().any(|l| l.starts_with("Set repeat to")));
        assert_eq!(lines.last().unwrap(), "Cleared tags");
    }

    #[test]
    fn test_describe_nothing() {
        assert!(describe_changes(&UpdateTaskRequest::default()).is_empty());
    }
}
