use anyhow::Result;
use tasktracker_core::models::{Outcome, TaskStatus};
use tasktracker_core::repository::TaskRepository;

use super::not_found_message;
use crate::cli::MarkCommand;

/// Shared by `mark-in-progress` and `mark-done`; the status is overwritten
/// whatever it was before.
pub async fn mark_task(
    repo: &impl TaskRepository,
    command: MarkCommand,
    status: TaskStatus,
) -> Result<()> {
    match repo.set_status(command.id, status).await? {
        Outcome::Applied(task) => println!("Marked task {} as {}", task.id, task.status),
        Outcome::NotFound(id) => println!("{}", not_found_message(id)),
    }
    Ok(())
}
