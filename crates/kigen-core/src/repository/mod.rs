use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTaskData, Task, TaskFilter, UpdateTaskData};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod tasks;

/// The shared task table.
///
/// Rows come back in insertion order; callers sort by urgency themselves.
#[async_trait]
pub trait TaskStore {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    async fn find_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, CoreError>;
    async fn complete_task(&self, id: Uuid, at: DateTime<Utc>) -> Result<Task, CoreError>;
    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
    async fn delete_tasks(&self, filter: &TaskFilter) -> Result<u64, CoreError>;
}

/// SQLite implementation of [`TaskStore`]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
