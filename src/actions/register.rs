use chrono::NaiveDate;
use serde::Deserialize;

use crate::crypto::{Argon2Hasher, PasswordHasher, SecretString};
use crate::invites::InviteRegistry;
use crate::jwt::JwtService;
use crate::repository::{NewPrincipal, Principal, PrincipalRepository};
use crate::validators::{validate_email, validate_name, validate_password, ValidationError};
use crate::AuthError;

/// Registration input. Only `name` and `password` are required; the invite
/// token is optional and its absence grants the default role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub token: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub password: Option<SecretString>,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub principal: Principal,
    /// Bearer token issued for immediate use.
    pub token: String,
}

/// Registers a new principal under the invite-token-gated role scheme.
pub struct RegisterAction<P, H = Argon2Hasher> {
    principals: P,
    invites: InviteRegistry,
    jwt: JwtService,
    hasher: H,
}

impl<P: PrincipalRepository> RegisterAction<P> {
    pub fn new(principals: P, invites: InviteRegistry, jwt: JwtService) -> Self {
        Self::with_hasher(principals, invites, jwt, Argon2Hasher::default())
    }
}

impl<P: PrincipalRepository, H: PasswordHasher> RegisterAction<P, H> {
    pub fn with_hasher(principals: P, invites: InviteRegistry, jwt: JwtService, hasher: H) -> Self {
        Self {
            principals,
            invites,
            jwt,
            hasher,
        }
    }

    /// Executes the registration.
    ///
    /// Resolves the invite token, rejects duplicate identities (email is
    /// checked before phone; the checks are independent), hashes the
    /// password, persists the principal and issues a claims token. Exactly
    /// one principal is persisted per successful call and none on any
    /// failure path.
    ///
    /// The duplicate check and the insert are two store operations, not
    /// one; a concurrent double-registration slipping between them is only
    /// fully prevented by a uniqueness constraint in the store itself.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register", skip_all, err)
    )]
    pub async fn execute(&self, request: RegisterRequest) -> Result<Registration, AuthError> {
        let role = self.invites.resolve(request.token.as_deref())?;

        let name = request.name.as_deref().unwrap_or_default();
        validate_name(name)?;

        let password = request
            .password
            .as_ref()
            .ok_or(ValidationError::PasswordEmpty)?;
        validate_password(password.expose_secret())?;

        if let Some(email) = request.email.as_deref() {
            validate_email(email)?;
            if self.principals.find_by_email(email).await?.is_some() {
                return Err(AuthError::EmailTaken);
            }
        }

        if let Some(phone) = request.phone.as_deref() {
            if self.principals.find_by_phone(phone).await?.is_some() {
                return Err(AuthError::PhoneTaken);
            }
        }

        let hashed_password = self.hasher.hash(password)?;

        let principal = self
            .principals
            .create(NewPrincipal {
                name: name.trim().to_owned(),
                email: request.email,
                phone: request.phone,
                birth_date: request.birth_date,
                hashed_password,
                role,
            })
            .await?;

        let token = self
            .jwt
            .issue(&principal.subject(), principal.role, principal.id)?;

        Ok(Registration { principal, token })
    }
}
