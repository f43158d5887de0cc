use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// `POST /auth/register`
///
/// Registers a new identity. The response exposes only the public fields;
/// the password hash never appears in any response body.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponseBody>), ApiError> {
    let command = body.try_into_command()?;

    let user = state.user_service.register_user(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseBody {
            message: "Utilisateur créé avec succès".to_string(),
            user: (&user).into(),
        }),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("champs name requis")]
    MissingName,

    #[error("champs email requis")]
    MissingEmail,

    #[error("email invalide")]
    InvalidEmail,

    #[error("champs password requis")]
    MissingPassword,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let name = DisplayName::new(self.name)
            .map_err(|_| ParseRegisterRequestError::MissingName)?;

        if self.email.trim().is_empty() {
            return Err(ParseRegisterRequestError::MissingEmail);
        }
        let email = EmailAddress::new(self.email)
            .map_err(|_| ParseRegisterRequestError::InvalidEmail)?;

        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::MissingPassword);
        }

        Ok(RegisterUserCommand::new(name, email, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseBody {
    pub message: String,
    pub user: UserData,
}

/// Public view of a user: id, name, and email only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
