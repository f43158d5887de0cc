use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::todo::errors::TaskDescriptionError;
use crate::user::models::UserId;

/// Todo aggregate entity.
///
/// Every todo has exactly one owner, set at creation from the
/// authenticated caller and never reassigned.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub task: TaskDescription,
    pub completed: bool,
    pub added_at: DateTime<Utc>,
    pub user_id: UserId,
}

/// Todo unique identifier, assigned by the database sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task description value type.
///
/// Any non-empty text after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Create a new validated task description.
    ///
    /// # Errors
    /// * `Empty` - Description is empty or whitespace-only
    pub fn new(task: String) -> Result<Self, TaskDescriptionError> {
        if task.trim().is_empty() {
            Err(TaskDescriptionError::Empty)
        } else {
            Ok(Self(task))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New todo record, persisted by the repository which assigns the id,
/// the default completion flag, and the creation timestamp.
///
/// `user_id` comes exclusively from the verified request identity,
/// never from a client-supplied body field.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task: TaskDescription,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_description_rejects_empty() {
        assert!(matches!(
            TaskDescription::new("".to_string()),
            Err(TaskDescriptionError::Empty)
        ));
        assert!(matches!(
            TaskDescription::new("  ".to_string()),
            Err(TaskDescriptionError::Empty)
        ));
    }

    #[test]
    fn test_task_description_accepts_text() {
        let task = TaskDescription::new("Faire les courses".to_string()).unwrap();
        assert_eq!(task.as_str(), "Faire les courses");
    }
}
