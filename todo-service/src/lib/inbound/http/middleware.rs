use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

/// Cookie carrying the signed identity token, set at login.
pub const JWT_COOKIE: &str = "jwt";

/// Extension type storing the verified caller identity in request extensions.
///
/// This is the only identity source downstream handlers may use: it is
/// populated exclusively from a token that passed signature and expiry
/// validation, never from a client-supplied claim.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that recovers the caller's identity from the raw signed token.
///
/// Accepts the token from the `jwt` cookie (set at login) or from an
/// `Authorization: Bearer` header, and always re-verifies it here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Token invalide ou expiré".to_string()).into_response()
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized("Token invalide ou expiré".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(user_id),
    });

    Ok(next.run(req).await)
}

/// Locate the raw signed token on the request.
///
/// Checks the `jwt` cookie first (browser clients), then the
/// `Authorization: Bearer` header (API clients).
fn extract_token(req: &Request) -> Result<&str, Response> {
    if let Some(token) = token_from_cookie(req) {
        return Ok(token);
    }

    if let Some(token) = token_from_authorization_header(req) {
        return Ok(token);
    }

    Err(ApiError::Unauthorized("Token manquant".to_string()).into_response())
}

fn token_from_cookie(req: &Request) -> Option<&str> {
    let cookies = req.headers().get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == JWT_COOKIE && !value.is_empty()).then_some(value)
    })
}

fn token_from_authorization_header(req: &Request) -> Option<&str> {
    let auth_str = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;

    auth_str.strip_prefix("Bearer ")
}
