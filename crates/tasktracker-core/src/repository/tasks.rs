use crate::error::CoreError;
use crate::models::{format_timestamp, Outcome, Task, TaskId, TaskStatus};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;
use sqlx::{QueryBuilder, Sqlite};

const TASK_COLUMNS: &str = "id, description, status, created_at, updated_at";

fn now() -> String {
    format_timestamp(&Utc::now().naive_utc())
}

impl SqliteRepository {
    /// Runs a single `... RETURNING` mutation, committing only when it hit a row.
    async fn mutate_one<'q>(
        &self,
        id: TaskId,
        query: QueryAs<'q, Sqlite, Task, SqliteArguments<'q>>,
    ) -> Result<Outcome<Task>, CoreError> {
        let mut tx = self.pool().begin().await?;

        match query.fetch_optional(&mut *tx).await? {
            Some(task) => {
                tx.commit().await?;
                Ok(Outcome::Applied(task))
            }
            None => {
                tracing::debug!(id, "no task matched, rolling back");
                tx.rollback().await?;
                Ok(Outcome::NotFound(id))
            }
        }
    }
}

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, description: &str) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as::<Sqlite, Task>(&format!(
            "INSERT INTO tasks (description) VALUES ($1) RETURNING {TASK_COLUMNS}"
        ))
        .bind(description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = task.id, "task added");
        Ok(task)
    }

    async fn update_description(
        &self,
        id: TaskId,
        description: &str,
    ) -> Result<Outcome<Task>, CoreError> {
        let sql = format!(
            "UPDATE tasks SET description = $1, updated_at = $2 WHERE id = $3 RETURNING {TASK_COLUMNS}"
        );
        let query = sqlx::query_as::<Sqlite, Task>(&sql).bind(description).bind(now()).bind(id);
        self.mutate_one(id, query).await
    }

    async fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Outcome<Task>, CoreError> {
        let sql = format!(
            "UPDATE tasks SET status = $1, updated_at = $2 WHERE id = $3 RETURNING {TASK_COLUMNS}"
        );
        let query = sqlx::query_as::<Sqlite, Task>(&sql).bind(status).bind(now()).bind(id);
        self.mutate_one(id, query).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<Outcome<Task>, CoreError> {
        let sql = format!("DELETE FROM tasks WHERE id = $1 RETURNING {TASK_COLUMNS}");
        let query = sqlx::query_as::<Sqlite, Task>(&sql).bind(id);
        self.mutate_one(id, query).await
    }

    async fn list_tasks(&self, filter: Option<TaskStatus>) -> Result<Vec<Task>, CoreError> {
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM tasks"));

        if let Some(status) = filter {
            query_builder.push(" WHERE status = ").push_bind(status);
        }
        query_builder.push(" ORDER BY id ASC");

        let tasks = query_builder.build_query_as().fetch_all(self.pool()).await?;
        Ok(tasks)
    }
}
