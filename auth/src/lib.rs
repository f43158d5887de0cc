//! Authentication utilities library
//!
//! Provides the credential infrastructure for the todo service:
//! - Password hashing (Argon2id)
//! - Signed identity token issuance and validation (JWT, HS256)
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these implementations,
//! so domain code never depends on a specific hash or token format.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::{Claims, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(&Claims::for_user(42, 24)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.user_id().unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token bound to the user id
//! let result = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Later requests: validate the bearer token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user_id().unwrap(), 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
