use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::{Claims, JwtConfig};
use crate::roles::Role;
use crate::AuthError;

/// Service for issuing and decoding claims tokens.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Creates a new service with the given configuration.
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues a signed token carrying the subject, role and principal id.
    pub fn issue(&self, subject: &str, role: Role, principal_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + self.config.expiry();

        let claims = Claims {
            sub: subject.to_owned(),
            role,
            pid: principal_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenInvalid)
    }

    /// Decodes and validates a token, returning the claims.
    ///
    /// # Errors
    ///
    /// `AuthError::TokenExpired` when the current time is at or past the
    /// token's expiry; `AuthError::TokenInvalid` for a bad signature or
    /// malformed structure.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token is rejected the moment its expiry passes, no grace window.
        validation.leeway = 0;

        let token_data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        Ok(token_data.claims)
    }

    /// Returns the configured token time-to-live.
    pub fn expiry(&self) -> Duration {
        self.config.expiry()
    }
}
