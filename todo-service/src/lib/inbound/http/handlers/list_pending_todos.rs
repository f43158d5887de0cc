use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_todo::TodoData;
use super::ApiError;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `GET /todos/pending`
///
/// Lists the authenticated caller's not-yet-completed todos.
pub async fn list_pending_todos(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<(StatusCode, Json<Vec<TodoData>>), ApiError> {
    let todos = state
        .todo_service
        .list_pending_todos(caller.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(todos.iter().map(TodoData::from).collect()),
    ))
}
