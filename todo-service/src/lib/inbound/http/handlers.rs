use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::todo::errors::TodoError;
use crate::user::errors::UserError;

pub mod complete_todo;
pub mod create_todo;
pub mod list_pending_todos;
pub mod list_todos;
pub mod login;
pub mod register;

/// Transport-level error, mapped onto the HTTP status taxonomy.
///
/// Every failure leaves the service as a structured `{message}` body;
/// internal details never reach the client, only the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        tracing::error!(error = %e, "Unhandled internal error");
        Self::InternalServerError("Erreur interne".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound("Utilisateur non trouvé".to_string()),
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Cet email est déjà utilisé".to_string())
            }
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Mot de passe invalide".to_string())
            }
            UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::BadRequest("Champs invalides".to_string())
            }
            UserError::PasswordHash(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::InternalServerError("Erreur interne".to_string())
            }
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound("Todo non trouvée".to_string()),
            TodoError::InvalidTask(_) => ApiError::BadRequest("champs task requis".to_string()),
            TodoError::DatabaseError(_) | TodoError::Unknown(_) => {
                tracing::error!(error = %err, "Todo operation failed");
                ApiError::InternalServerError("Erreur interne".to_string())
            }
        }
    }
}

/// Body shape shared by every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn status_and_message(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).expect("Failed to parse response body");

        (status, body["message"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_unknown_user_maps_to_404() {
        let err = ApiError::from(UserError::NotFound("absent@example.com".to_string()));

        let (status, message) = status_and_message(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Utilisateur non trouvé");
    }

    #[tokio::test]
    async fn test_invalid_credentials_map_to_401() {
        let err = ApiError::from(UserError::InvalidCredentials);

        let (status, message) = status_and_message(err).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Mot de passe invalide");
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_400() {
        let err = ApiError::from(UserError::EmailAlreadyExists(
            "jean@example.com".to_string(),
        ));

        let (status, message) = status_and_message(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Cet email est déjà utilisé");
    }

    #[tokio::test]
    async fn test_infrastructure_failure_is_opaque() {
        let err = ApiError::from(UserError::DatabaseError("connection reset".to_string()));

        let (status, message) = status_and_message(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Erreur interne");
    }
}
