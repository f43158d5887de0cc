use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by an identity token.
///
/// `sub` holds the user id, `exp` the absolute expiration instant. The token
/// is a stateless bearer credential: nothing else is needed to reconstruct
/// the caller's identity on a later request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier, decimal string)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims binding a user id to an expiration window.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: i64, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Parse the user id out of the subject claim.
    ///
    /// # Errors
    /// * `InvalidSubject` - `sub` is not a decimal integer
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse()
            .map_err(|_| JwtError::InvalidSubject(self.sub.clone()))
    }
}
