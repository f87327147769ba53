//! Role-based authorization gate for protected operations.
//!
//! A [`RoleGuard`] is composed around an operation rather than woven into
//! the transport layer, so the decision stays independently testable. The
//! guard authenticates first and inspects the role claim second: a missing,
//! garbled or expired token is always `Unauthenticated`, never `Forbidden`.

use std::collections::HashSet;

use crate::jwt::{Claims, JwtService};
use crate::roles::Role;
use crate::AuthError;

/// Guards a protected operation behind a set of allowed roles.
#[derive(Clone)]
pub struct RoleGuard {
    jwt: JwtService,
    allowed: HashSet<Role>,
}

impl RoleGuard {
    /// Creates a guard allowing the given roles.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Configuration` when the role set is empty; a
    /// guard that admits nobody is a wiring mistake, not a policy.
    pub fn new(
        jwt: JwtService,
        allowed: impl IntoIterator<Item = Role>,
    ) -> Result<Self, AuthError> {
        let allowed: HashSet<Role> = allowed.into_iter().collect();

        if allowed.is_empty() {
            return Err(AuthError::Configuration(
                "RoleGuard requires at least one allowed role".to_owned(),
            ));
        }

        Ok(Self { jwt, allowed })
    }

    /// Admits or denies a caller presenting an optional bearer token.
    ///
    /// On success the parsed claims are handed to the protected operation
    /// for its own use.
    ///
    /// # Errors
    ///
    /// `AuthError::Unauthenticated` when the token is absent, malformed or
    /// expired; `AuthError::Forbidden` when the token is valid but its role
    /// is not in the allowed set.
    pub fn authorize(&self, bearer: Option<&str>) -> Result<Claims, AuthError> {
        let token = bearer.ok_or(AuthError::Unauthenticated)?;

        let claims = self
            .jwt
            .decode(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        if !self.allowed.contains(&claims.role) {
            return Err(AuthError::Forbidden {
                role: claims.role,
                allowed: self.allowed_roles(),
            });
        }

        Ok(claims)
    }

    /// The allowed roles, sorted by privilege.
    #[must_use]
    pub fn allowed_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.allowed.iter().copied().collect();
        roles.sort();
        roles
    }
}
