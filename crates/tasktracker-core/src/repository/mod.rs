use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{Outcome, Task, TaskId, TaskStatus};
use async_trait::async_trait;

pub mod tasks;

/// Data access for the `tasks` table.
///
/// Every id-based mutation issues a single statement inside a transaction
/// that is committed only when a row matched; otherwise nothing is written
/// and [`Outcome::NotFound`] is returned.
#[async_trait]
pub trait TaskRepository {
    /// Inserts a new task with status `todo`.
    async fn add_task(&self, description: &str) -> Result<Task, CoreError>;
    /// Replaces the description and refreshes `updated_at`.
    async fn update_description(&self, id: TaskId, description: &str) -> Result<Outcome<Task>, CoreError>;
    /// Sets the status and refreshes `updated_at`. Any status may follow any other.
    async fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Outcome<Task>, CoreError>;
    /// Permanently removes the task, returning the deleted row.
    async fn delete_task(&self, id: TaskId) -> Result<Outcome<Task>, CoreError>;
    /// All tasks ordered by ascending id, optionally restricted to one status.
    async fn list_tasks(&self, filter: Option<TaskStatus>) -> Result<Vec<Task>, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Closes the underlying handle, waiting for the connection to shut down.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
