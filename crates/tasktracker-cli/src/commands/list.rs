use anyhow::Result;
use tasktracker_core::models::TaskStatus;
use tasktracker_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::views::{json, table};

pub async fn list_tasks(repo: &impl TaskRepository, command: ListCommand) -> Result<()> {
    let filter = command.filter.map(TaskStatus::from);
    let tasks = repo.list_tasks(filter).await?;

    if command.json {
        json::display_tasks(&tasks)?;
        return Ok(());
    }

    let view_tasks: Vec<table::ViewTask> = tasks.iter().map(table::ViewTask::from).collect();
    table::display_tasks(&view_tasks);
    Ok(())
}
