use crate::due::format_iso;
use crate::error::CoreError;
use crate::models::{NewTaskData, StatusFilter, Task, TaskFilter, UpdateTaskData};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &TaskFilter) {
    builder.push(" WHERE 1 = 1");
    if let Some(owner_id) = &filter.owner_id {
        builder.push(" AND owner_id = ").push_bind(owner_id.clone());
    }
    match filter.status {
        StatusFilter::Pending => {
            builder.push(" AND completed = FALSE");
        }
        StatusFilter::Completed => {
            builder.push(" AND completed = TRUE");
        }
        StatusFilter::All => {}
    }
}

#[async_trait]
impl super::TaskStore for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        let name = data.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::InvalidInput(
                "Task name cannot be empty.".to_string(),
            ));
        }

        let task = Task {
            id: Uuid::now_v7(),
            name,
            created_at: data.created_at.unwrap_or_else(Utc::now),
            completed: false,
            completed_at: None,
            owner_id: data.owner_id,
            owner_name: data.owner_name,
            due_date: data.due_date.map(format_iso),
        };

        sqlx::query(
            r#"INSERT INTO tasks (id, name, created_at, completed, completed_at, owner_id, owner_name, due_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(task.id)
        .bind(&task.name)
        .bind(task.created_at)
        .bind(task.completed)
        .bind(task.completed_at)
        .bind(&task.owner_id)
        .bind(&task.owner_name)
        .bind(&task.due_date)
        .execute(self.pool())
        .await?;

        tracing::debug!(id = %task.id, owner = %task.owner_id, due = ?task.due_date, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, CoreError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM tasks");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY rowid");

        let tasks = builder.build_query_as().fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn complete_task(&self, id: Uuid, at: DateTime<Utc>) -> Result<Task, CoreError> {
        let result = sqlx::query("UPDATE tasks SET completed = TRUE, completed_at = $1 WHERE id = $2")
            .bind(at)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }

        tracing::debug!(%id, "task completed");
        self.find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let mut task: Task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if let Some(name) = data.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::InvalidInput(
                    "Task name cannot be empty.".to_string(),
                ));
            }
            task.name = name;
        }
        if let Some(due_date) = data.due_date {
            task.due_date = due_date.map(format_iso);
        }

        sqlx::query("UPDATE tasks SET name = $1, due_date = $2 WHERE id = $3")
            .bind(&task.name)
            .bind(&task.due_date)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(%id, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_tasks(&self, filter: &TaskFilter) -> Result<u64, CoreError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM tasks");
        push_filter(&mut builder, filter);

        let result = builder.build().execute(self.pool()).await?;
        tracing::debug!(deleted = result.rows_affected(), "tasks deleted");
        Ok(result.rows_affected())
    }
}
