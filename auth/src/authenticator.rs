use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the fixed signing secret and expiration window; otherwise stateless,
/// so a single instance is shared across all requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    expiration_hours: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token bound to the authenticated user id
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `expiration_hours` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret),
            expiration_hours,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token bound to `user_id`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Password` - Stored hash is corrupt
    /// * `Jwt` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_user(user_id, self.expiration_hours);
        let access_token = self.token_codec.issue(&claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a bearer token and recover its claims.
    ///
    /// This is the single trusted verification step: every ownership-sensitive
    /// operation receives its caller identity from here, never from an
    /// unverified request field.
    ///
    /// # Errors
    /// * `JwtError` - Signature, expiry, or format validation failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_codec.decode(token)
    }
}
