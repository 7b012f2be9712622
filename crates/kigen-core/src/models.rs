use crate::due::parse_iso;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// One row of the shared task table.
///
/// Columns follow the sheet header the group has always used:
/// `タスク名 作成日 完了 完了日 ユーザーID ユーザー名 期限`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub owner_id: String,
    pub owner_name: String,
    /// Stored as `YYYY-MM-DD`; anything else reads as no due date.
    pub due_date: Option<String>,
}

impl Task {
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_iso)
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            name: "".to_string(),
            created_at: Utc::now(),
            completed: false,
            completed_at: None,
            owner_id: "".to_string(),
            owner_name: "".to_string(),
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    Pending,
    Completed,
    All,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid status filter: {0}")]
pub struct ParseStatusFilterError(String);

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            "all" => Ok(StatusFilter::All),
            _ => Err(ParseStatusFilterError(s.to_string())),
        }
    }
}

/// Selects rows for listing or bulk deletion.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub owner_id: Option<String>,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn pending_for(owner_id: &str) -> Self {
        Self {
            owner_id: Some(owner_id.to_string()),
            status: StatusFilter::Pending,
        }
    }

    pub fn owned_by(owner_id: &str, status: StatusFilter) -> Self {
        Self {
            owner_id: Some(owner_id.to_string()),
            status,
        }
    }

    pub fn everyone(status: StatusFilter) -> Self {
        Self {
            owner_id: None,
            status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub name: String,
    pub owner_id: String,
    pub owner_name: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub name: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}
