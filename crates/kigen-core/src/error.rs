use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid task number {number}: choose between 1 and {len}")]
    InvalidNumber { number: usize, len: usize },

    #[error("No tasks to choose from")]
    NoTasks,

    #[error("Could not understand due date '{0}'")]
    UnrecognizedDueDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}
