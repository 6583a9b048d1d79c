use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A throwaway database in a temporary directory
struct TestEnv {
    _temp_dir: TempDir,
    db_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = temp_dir.path().join("cli_test.db");
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    fn db(&self) -> &Path {
        &self.db_path
    }

    /// `cadence --no-color --database-file <db>` in UTC
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        cmd.env("TZ", "UTC")
            .arg("--no-color")
            .arg("--database-file")
            .arg(self.db());
        cmd
    }

    /// Adds a task and returns its short ID.
    fn add_task(&self, args: &[&str]) -> String {
        let output = self
            .cmd()
            .args(["task", "add"])
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        short_id(&String::from_utf8(output).expect("utf-8 output"), "Created task with ID: ")
    }
}

/// The ID printed after `marker`.
fn short_id(stdout: &str, marker: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(marker))
        .map(|id| id.trim().to_string())
        .unwrap_or_else(|| panic!("no '{marker}' in output:\n{stdout}"))
}

#[test]
fn test_cli_list_empty() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_add_and_show_task() {
    let env = TestEnv::new();
    let id = env.add_task(&[
        "Water plants",
        "--notes",
        "Balcony first",
        "--due",
        "2024-05-10T09:00[UTC]",
        "--repeat",
        "custom",
        "--every-days",
        "14",
    ]);
    assert_eq!(id.len(), 8);

    env.cmd()
        .args(["task", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Water plants"))
        .stdout(predicate::str::contains("- Due: Fri 2024-05-10 09:00 UTC"))
        .stdout(predicate::str::contains("- Repeats: every 2 weeks"))
        .stdout(predicate::str::contains("Balcony first"));
}

#[test]
fn test_cli_no_command_lists_open_tasks() {
    let env = TestEnv::new();
    env.add_task(&["Read the paper"]);

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Open Tasks"))
        .stdout(predicate::str::contains("- [ ] **Read the paper**"));
}

#[test]
fn test_cli_done_spawns_next_weekday() {
    let env = TestEnv::new();
    let id = env.add_task(&[
        "Stand-up",
        "--due",
        "2024-05-10T09:00[UTC]",
        "--remind-before",
        "15m",
        "--repeat",
        "weekdays",
    ]);

    // Friday rolls over to Monday, reminder keeps its 15 minute lead
    let output = env
        .cmd()
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task 'Stand-up'"))
        .stdout(predicate::str::contains("- Due: Mon 2024-05-13 09:00 UTC"))
        .stdout(predicate::str::contains("- Reminder: Mon 2024-05-13 08:45 UTC"))
        .get_output()
        .stdout
        .clone();
    let next_id = short_id(
        &String::from_utf8(output).unwrap(),
        "Next occurrence created with ID: ",
    );
    assert_ne!(next_id, id);

    env.cmd()
        .args(["reminder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon 2024-05-13 08:45 UTC: Stand-up"))
        .stdout(predicate::str::contains(next_id.as_str()));

    env.cmd()
        .args(["task", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] **Stand-up**"))
        .stdout(predicate::str::contains("- [ ] **Stand-up**"));
}

#[test]
fn test_cli_done_twice_fails() {
    let env = TestEnv::new();
    let id = env.add_task(&["One-off"]);

    env.cmd()
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next occurrence").not());

    env.cmd()
        .args(["task", "done", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already completed"));
}

#[test]
fn test_cli_update_task() {
    let env = TestEnv::new();
    let id = env.add_task(&["Draft report", "--due", "2024-05-10"]);

    env.cmd()
        .args([
            "task",
            "update",
            &id,
            "--title",
            "Final report",
            "--status",
            "in-progress",
            "--clear-due",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated title to 'Final report'"))
        .stdout(predicate::str::contains("Cleared due date"))
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("- Due:").not());
}

#[test]
fn test_cli_update_rejects_completed_status() {
    let env = TestEnv::new();
    let id = env.add_task(&["Laundry"]);

    env.cmd()
        .args(["task", "update", &id, "--status", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("complete operation"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let env = TestEnv::new();
    let id = env.add_task(&["Old chore"]);

    env.cmd()
        .args(["task", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    env.cmd()
        .args(["task", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Old chore'"));

    env.cmd()
        .args(["task", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_show_rejects_non_hex_id() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "show", "not-a-task"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a task ID"));
}

#[test]
fn test_cli_projects_and_tags() {
    let env = TestEnv::new();

    env.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));

    env.cmd()
        .args(["project", "add", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project 'Home' with ID: 1"));
    env.cmd()
        .args(["tag", "add", "errand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tag 'errand' with ID: 1"));

    let id = env.add_task(&["Buy bulbs", "--project", "1", "--tag", "1"]);

    env.cmd()
        .args(["task", "list", "--project", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy bulbs"));
    env.cmd()
        .args(["tag", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **#errand** (ID: 1)"));

    // Deleting the project keeps the task
    env.cmd()
        .args(["project", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Home'"));
    env.cmd()
        .args(["task", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Project:").not());

    env.cmd()
        .args(["tag", "delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tag 7 not found"));
}

#[test]
fn test_cli_unknown_project_is_rejected() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "add", "Orphan", "--project", "42"])
        .assert()
        .failure();
}

#[test]
fn test_cli_custom_repeat_needs_interval() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "add", "Backup", "--repeat", "custom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--every-days"));
}

#[test]
fn test_cli_reminders_before_cutoff() {
    let env = TestEnv::new();
    env.add_task(&["Early", "--reminder", "2024-05-01T08:00[UTC]"]);
    env.add_task(&["Late", "--reminder", "2024-06-01T08:00[UTC]"]);

    env.cmd()
        .args(["reminder", "list", "--before", "2024-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Early"))
        .stdout(predicate::str::contains("Late").not());

    env.cmd()
        .args(["reminder", "list", "--before", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending reminders."));
}

#[test]
fn test_cli_invalid_date() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "add", "Someday", "--due", "whenever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date 'whenever'"));
}
