use thiserror::Error;

/// Error for TaskDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDescriptionError {
    #[error("Task description must not be empty")]
    Empty,
}

/// Top-level error for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid task description: {0}")]
    InvalidTask(#[from] TaskDescriptionError),

    /// Returned both when the todo does not exist and when it belongs to
    /// another user, so callers cannot probe for foreign todo ids.
    #[error("Todo not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TodoError {
    fn from(err: anyhow::Error) -> Self {
        TodoError::Unknown(err.to_string())
    }
}
