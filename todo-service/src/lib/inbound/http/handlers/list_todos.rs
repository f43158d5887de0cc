use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::create_todo::TodoData;
use super::ApiError;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `GET /todos`
///
/// Lists the authenticated caller's todos, newest first. There is no
/// cross-user listing: the scope is always the verified caller identity.
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<(StatusCode, Json<ListTodosResponseBody>), ApiError> {
    let todos = state.todo_service.list_todos(caller.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ListTodosResponseBody {
            message: format!("Tâches de l'utilisateur {}", caller.user_id),
            todos: todos.iter().map(TodoData::from).collect(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTodosResponseBody {
    pub message: String,
    pub todos: Vec<TodoData>,
}
