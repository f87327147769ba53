//! Invite-token registry.
//!
//! Invite tokens are long-lived shared secrets distributed out of band.
//! Presenting one at registration grants the mapped role; registering
//! without one grants [`DEFAULT_GRANT`]. The mapping is injected at
//! construction and never mutated.

use std::collections::HashMap;

use crate::roles::Role;
use crate::AuthError;

/// Role granted when no invite token is presented.
pub const DEFAULT_GRANT: Role = Role::Member;

/// Immutable mapping from invite tokens to granted roles.
#[derive(Debug, Clone, Default)]
pub struct InviteRegistry {
    grants: HashMap<String, Role>,
}

impl InviteRegistry {
    #[must_use]
    pub fn new(grants: HashMap<String, Role>) -> Self {
        Self { grants }
    }

    /// Resolves the role a registration should receive.
    ///
    /// An absent token is valid and yields [`DEFAULT_GRANT`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InviteInvalid` when a token is presented but not
    /// in the registry.
    pub fn resolve(&self, token: Option<&str>) -> Result<Role, AuthError> {
        match token {
            None => Ok(DEFAULT_GRANT),
            Some(token) => self.lookup(token).ok_or(AuthError::InviteInvalid),
        }
    }

    /// Looks up a token without applying the default-role rule.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<Role> {
        self.grants.get(token).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> InviteRegistry {
        InviteRegistry::new(HashMap::from([
            ("trainer-secret-123".to_owned(), Role::Trainer),
            ("admin-secret-456".to_owned(), Role::Admin),
        ]))
    }

    #[test]
    fn test_absent_token_grants_default_role() {
        assert_eq!(registry().resolve(None).unwrap(), Role::Member);
    }

    #[test]
    fn test_known_token_grants_mapped_role() {
        let registry = registry();
        assert_eq!(
            registry.resolve(Some("trainer-secret-123")).unwrap(),
            Role::Trainer
        );
        assert_eq!(
            registry.resolve(Some("admin-secret-456")).unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(
            registry().resolve(Some("bogus")).unwrap_err(),
            AuthError::InviteInvalid
        );
    }

    #[test]
    fn test_lookup_has_no_default_rule() {
        let registry = registry();
        assert_eq!(registry.lookup("trainer-secret-123"), Some(Role::Trainer));
        assert_eq!(registry.lookup("bogus"), None);
    }
}
