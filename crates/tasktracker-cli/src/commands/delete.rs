use anyhow::Result;
use tasktracker_core::models::Outcome;
use tasktracker_core::repository::TaskRepository;

use super::not_found_message;
use crate::cli::DeleteCommand;

pub async fn delete_task(repo: &impl TaskRepository, command: DeleteCommand) -> Result<()> {
    match repo.delete_task(command.id).await? {
        Outcome::Applied(task) => println!("Deleted task {}", task.id),
        Outcome::NotFound(id) => println!("{}", not_found_message(id)),
    }
    Ok(())
}
