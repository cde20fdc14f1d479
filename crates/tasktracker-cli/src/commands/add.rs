use anyhow::Result;
use tasktracker_core::repository::TaskRepository;

use crate::cli::AddCommand;

pub async fn add_task(repo: &impl TaskRepository, command: AddCommand) -> Result<()> {
    let task = repo.add_task(&command.name).await?;
    tracing::debug!(id = task.id, "added task");
    println!("Added {}", task.description);
    Ok(())
}
