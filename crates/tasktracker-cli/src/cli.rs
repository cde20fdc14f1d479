use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tasktracker_core::models::{TaskId, TaskStatus};

/// A small command-line task tracker backed by SQLite
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the database file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a task to the database
    Add(AddCommand),
    /// Update the name of the task
    Update(UpdateCommand),
    /// Delete the task
    Delete(DeleteCommand),
    /// Mark the task as in progress
    MarkInProgress(MarkCommand),
    /// Mark the task as done
    MarkDone(MarkCommand),
    /// List all tasks and information about them
    List(ListCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Name of the task
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateCommand {
    /// Id of the task to update
    pub id: TaskId,
    /// New name for the task
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// Id of the task to delete
    pub id: TaskId,
}

#[derive(Parser, Debug, Clone)]
pub struct MarkCommand {
    /// Id of the task to mark
    pub id: TaskId,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only show tasks with this status
    #[arg(value_enum)]
    pub filter: Option<StatusFilter>,
    /// Format the output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Status values accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Todo,
    InProgress,
    Done,
}

impl From<StatusFilter> for TaskStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Todo => TaskStatus::Todo,
            StatusFilter::InProgress => TaskStatus::InProgress,
            StatusFilter::Done => TaskStatus::Done,
        }
    }
}
