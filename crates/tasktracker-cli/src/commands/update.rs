use anyhow::Result;
use tasktracker_core::models::Outcome;
use tasktracker_core::repository::TaskRepository;

use super::not_found_message;
use crate::cli::UpdateCommand;

pub async fn update_task(repo: &impl TaskRepository, command: UpdateCommand) -> Result<()> {
    match repo.update_description(command.id, &command.name).await? {
        Outcome::Applied(task) => println!("Updated {} to {}", task.id, task.description),
        Outcome::NotFound(id) => println!("{}", not_found_message(id)),
    }
    Ok(())
}
