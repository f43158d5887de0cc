use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues and decodes signed identity tokens.
///
/// Uses HS256 (HMAC with SHA-256). The signing secret is held server-side
/// and never leaves the process; a token signed with a different secret
/// fails validation, which is the sole integrity guarantee against
/// identity spoofing.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec from a signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a token string.
    ///
    /// Stateless issuance: no session record is created anywhere.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, and recover its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its `exp` instant
    /// * `InvalidSignature` - Signature was computed with a different secret
    /// * `Malformed` - Wire format cannot be parsed as a JWT
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_decode() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user(42, 24);
        let token = codec.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.user_id().unwrap(), 42);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user(42, -2);
        let token = codec.issue(&claims).expect("Failed to issue token");

        let result = codec.decode(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue(&Claims::for_user(42, 24))
            .expect("Failed to issue token");

        let result = verifier.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_malformed_token() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = codec.decode("definitely.not.a_jwt");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }
}
