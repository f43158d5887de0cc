use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::TaskDescription;
use crate::domain::todo::models::Todo;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `POST /todos`
///
/// Creates a todo owned by the authenticated caller. The owner id comes
/// from the verified token identity, never from the request body.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoData>), ApiError> {
    let task = TaskDescription::new(body.task)
        .map_err(|_| ApiError::BadRequest("champs task requis".to_string()))?;

    let todo = state
        .todo_service
        .create_todo(NewTodo {
            task,
            user_id: caller.user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json((&todo).into())))
}

/// HTTP request body for creating a todo (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    task: String,
}

/// Wire representation of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoData {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub added_at: DateTime<Utc>,
    pub user_id: i64,
}

impl From<&Todo> for TodoData {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.0,
            task: todo.task.as_str().to_string(),
            completed: todo.completed,
            added_at: todo.added_at,
            user_id: todo.user_id.0,
        }
    }
}
