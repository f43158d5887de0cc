use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::create_todo::TodoData;
use super::ApiError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `PUT /todos/{id}/complete`
///
/// Marks one of the caller's todos as completed. A todo owned by another
/// user behaves exactly like a missing one: 404.
pub async fn complete_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<CompleteTodoResponseBody>), ApiError> {
    let todo = state
        .todo_service
        .complete_todo(TodoId(id), caller.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CompleteTodoResponseBody {
            message: "Todo mise à jour avec succès".to_string(),
            data: (&todo).into(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteTodoResponseBody {
    pub message: String,
    pub data: TodoData,
}
