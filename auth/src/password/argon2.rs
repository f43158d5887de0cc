use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way salted password hashing (Argon2id).
///
/// Every call to [`hash`](PasswordHasher::hash) draws a fresh random salt,
/// so hashing the same password twice never yields the same digest.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a password hasher with the library's default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// A well-formed hash that does not match returns `Ok(false)`, never an
    /// error. The underlying comparison is constant-time.
    ///
    /// # Errors
    /// * `CorruptHash` - `hash` is not a parseable PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::CorruptHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("password123").expect("Failed to hash");
        let second = hasher.hash("password123").expect("Failed to hash");

        // Fresh salt per call
        assert_ne!(first, second);
        assert!(hasher.verify("password123", &first).unwrap());
        assert!(hasher.verify("password123", &second).unwrap());
    }

    #[test]
    fn test_verify_corrupt_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not_a_phc_string");
        assert!(matches!(result, Err(PasswordError::CorruptHash(_))));
    }
}
