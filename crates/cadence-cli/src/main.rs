//! Cadence CLI Application
//!
//! Command-line interface for the Cadence task manager. Set `RUST_LOG=debug`
//! to see what the core library is doing.

mod args;
mod cli;
mod commands;
mod dates;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{params::ListTasks, TaskManagerBuilder};
use clap::Parser;
use commands::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let manager = TaskManagerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize task manager")?;

    info!("Cadence started with {}", manager.database_path().display());

    let cli = Cli::new(manager, TerminalRenderer::new(!no_color));

    match command {
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Tag { command }) => cli.handle_tag_command(command).await,
        Some(Reminder { command }) => cli.handle_reminder_command(command).await,
        None => cli.list_tasks(&ListTasks::default()).await,
    }
}
