use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ProjectCommands, ReminderCommands, TagCommands, TaskCommands};

/// Cadence: a personal task manager with recurring tasks and reminders
///
/// Tasks can repeat daily, on weekdays, weekly, monthly, yearly or every N
/// days. Completing a recurring task creates its next occurrence, carrying
/// the reminder forward by the same offset. Running `cadence` without a
/// command lists open tasks.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Inspect queued reminders
    #[command(alias = "r")]
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_allowed() {
        let args = Args::try_parse_from(["cadence"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_custom_repeat_requires_interval() {
        let parsed = Args::try_parse_from(["cadence", "task", "add", "Water", "--repeat", "custom"]);
        assert!(parsed.is_err());

        let parsed = Args::try_parse_from([
            "cadence", "task", "add", "Water", "--repeat", "custom", "--every-days", "3",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_remind_before_requires_due_date() {
        let parsed = Args::try_parse_from(["cadence", "task", "add", "Call", "--remind-before", "15m"]);
        assert!(parsed.is_err());
    }
}
