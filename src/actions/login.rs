use chrono::Utc;
use serde::Deserialize;

use crate::crypto::{Argon2Hasher, PasswordHasher, SecretString};
use crate::jwt::JwtService;
use crate::repository::{Principal, PrincipalRepository};
use crate::validators::ValidationError;
use crate::AuthError;

/// Login input. Email is the only supported login identity; a request
/// carrying a phone number is rejected outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<SecretString>,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Login {
    pub principal: Principal,
    pub token: String,
    /// Token expiry (Unix timestamp).
    pub expires_at: i64,
}

/// Authenticates a returning principal by email and password.
pub struct LoginAction<P, H = Argon2Hasher> {
    principals: P,
    jwt: JwtService,
    hasher: H,
}

impl<P: PrincipalRepository> LoginAction<P> {
    pub fn new(principals: P, jwt: JwtService) -> Self {
        Self::with_hasher(principals, jwt, Argon2Hasher::default())
    }
}

impl<P: PrincipalRepository, H: PasswordHasher> LoginAction<P, H> {
    pub fn with_hasher(principals: P, jwt: JwtService, hasher: H) -> Self {
        Self {
            principals,
            jwt,
            hasher,
        }
    }

    /// Executes the login, issuing a token that carries the principal's
    /// persisted role and id.
    ///
    /// Unknown email and wrong password surface as distinct errors; the
    /// asymmetry leaks account existence and is kept deliberately.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(&self, request: LoginRequest) -> Result<Login, AuthError> {
        if request.phone.is_some() {
            return Err(AuthError::PhoneLoginUnsupported);
        }

        let email = request
            .email
            .as_deref()
            .filter(|email| !email.is_empty())
            .ok_or(ValidationError::EmailEmpty)?;

        let password = request
            .password
            .as_ref()
            .filter(|password| !password.is_empty())
            .ok_or(ValidationError::PasswordEmpty)?;

        let principal = self
            .principals
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(password, &principal.hashed_password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .jwt
            .issue(&principal.subject(), principal.role, principal.id)?;
        let expires_at = (Utc::now() + self.jwt.expiry()).timestamp();

        Ok(Login {
            principal,
            token,
            expires_at,
        })
    }
}
