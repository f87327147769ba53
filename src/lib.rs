//! vestibule — the front room your users pass through before the studio floor.
//!
//! Provides invite-gated registration, email/password login, stateless JWT
//! claims tokens, a reusable role guard for protected operations, and an
//! oversubscription-safe capacity claim for bookable class slots.
//!
//! Storage is abstracted behind repository traits; bring your own database
//! or enable the `postgres` feature. Enable `mocks` for in-memory
//! implementations useful in tests, and `axum_api` for ready-made HTTP
//! routes.

pub mod actions;
pub mod crypto;
pub mod guard;
pub mod invites;
pub mod jwt;
pub mod repository;
pub mod roles;
pub mod validators;

#[cfg(feature = "axum_api")]
pub mod api;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use crypto::{Argon2Hasher, PasswordHasher, SecretString};
pub use guard::RoleGuard;
pub use invites::InviteRegistry;
pub use jwt::{Claims, JwtConfig, JwtService};
pub use repository::{CapacityRepository, NewPrincipal, Principal, PrincipalRepository};
pub use roles::Role;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockCapacityRepository, MockPrincipalRepository};

use std::fmt;

/// Every failure the crate can surface.
///
/// All variants except `PasswordHash`, `Configuration`, and `Database` are
/// expected outcomes the caller can recover from; those three indicate a
/// server-side problem.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    Validation(ValidationError),
    InviteInvalid,
    EmailTaken,
    PhoneTaken,
    UserNotFound,
    InvalidCredentials,
    PhoneLoginUnsupported,
    Unauthenticated,
    Forbidden { role: Role, allowed: Vec<Role> },
    TokenInvalid,
    TokenExpired,
    PasswordHash,
    Configuration(String),
    Database(String),
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(err) => write!(f, "{err}"),
            AuthError::InviteInvalid => write!(f, "Invalid or expired invite token"),
            AuthError::EmailTaken => write!(f, "Email already registered"),
            AuthError::PhoneTaken => write!(f, "Phone already registered"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::InvalidCredentials => {
                write!(f, "Login credentials and password do not match")
            }
            AuthError::PhoneLoginUnsupported => {
                write!(f, "Phone login is not supported; use email")
            }
            AuthError::Unauthenticated => write!(f, "Missing or invalid authorization header"),
            AuthError::Forbidden { role, allowed } => {
                let allowed: Vec<&str> = allowed.iter().map(Role::as_str).collect();
                write!(
                    f,
                    "role '{role}' has insufficient permissions, requires one of: {}",
                    allowed.join(", ")
                )
            }
            AuthError::TokenInvalid => write!(f, "Invalid token"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::PasswordHash => write!(f, "Failed to hash password"),
            AuthError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            AuthError::Database(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err)
    }
}
