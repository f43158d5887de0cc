use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::JWT_COOKIE;
use crate::inbound::http::router::AppState;

/// `POST /auth/login`
///
/// Verifies credentials and delivers the signed identity token as an
/// HttpOnly session cookie. The token is not echoed in the body.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    // Unknown email surfaces as 404, wrong password as 401. The split is
    // part of the public contract, kept as-is.
    let user = state.user_service.get_user_by_email(&body.email).await?;

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, user.id.0)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Mot de passe invalide".to_string())
            }
            auth::AuthenticationError::Password(err) => {
                tracing::error!(error = %err, user_id = %user.id, "Stored hash unusable");
                ApiError::InternalServerError("Erreur interne".to_string())
            }
            auth::AuthenticationError::Jwt(err) => {
                tracing::error!(error = %err, user_id = %user.id, "Token issuance failed");
                ApiError::InternalServerError("Erreur interne".to_string())
            }
        })?;

    success_response(&result.access_token, state.jwt_expiration_hours)
}

/// 200 with the success message and the token delivered as a session cookie.
fn success_response(token: &str, expiration_hours: i64) -> Result<Response, ApiError> {
    let cookie = session_cookie(token, expiration_hours);
    let cookie_header = HeaderValue::from_str(&cookie).map_err(|e| {
        tracing::error!(error = %e, "Session cookie is not a valid header value");
        ApiError::InternalServerError("Erreur interne".to_string())
    })?;

    let mut response = (
        StatusCode::OK,
        Json(LoginResponseBody {
            message: "Login réussi !".to_string(),
        }),
    )
        .into_response();
    response.headers_mut().insert(SET_COOKIE, cookie_header);

    Ok(response)
}

/// Build the session cookie, expiring together with the token itself.
fn session_cookie(token: &str, expiration_hours: i64) -> String {
    format!(
        "{}={}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={}",
        JWT_COOKIE,
        token,
        expiration_hours * 3600
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::Claims;
    use auth::TokenCodec;
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc.def.ghi", 24);

        assert!(cookie.starts_with("jwt=abc.def.ghi;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Max-Age=86400"));
    }

    #[tokio::test]
    async fn test_success_response_sets_identity_cookie() {
        let codec = TokenCodec::new(b"test-secret-key-for-jwt-signing-at-least-32-bytes");
        let token = codec
            .issue(&Claims::for_user(42, 24))
            .expect("Failed to issue token");

        let response = success_response(&token, 24).expect("Failed to build response");

        assert_eq!(response.status(), StatusCode::OK);

        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("Missing session cookie")
            .to_str()
            .expect("Cookie is not valid ASCII")
            .to_string();
        let value = cookie
            .strip_prefix("jwt=")
            .and_then(|rest| rest.split(';').next())
            .expect("Cookie does not carry the token");
        let claims = codec.decode(value).expect("Cookie token does not verify");
        assert_eq!(claims.user_id().unwrap(), 42);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).expect("Failed to parse response body");
        assert_eq!(body["message"], "Login réussi !");
    }
}
