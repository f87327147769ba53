#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::AuthError;

use super::principal::{NewPrincipal, Principal, PrincipalRepository};

/// In-memory principal store for tests.
///
/// Note: like a store without unique indexes, this mock does not enforce
/// email/phone uniqueness itself; that check lives in the registration
/// action's fast path.
#[derive(Clone, Default)]
pub struct MockPrincipalRepository {
    pub principals: Arc<Mutex<Vec<Principal>>>,
}

impl MockPrincipalRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, AuthError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, AuthError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals
            .iter()
            .find(|p| p.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Principal>, AuthError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals
            .iter()
            .find(|p| p.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, new: NewPrincipal) -> Result<Principal, AuthError> {
        let now = Utc::now();
        let principal = Principal {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            birth_date: new.birth_date,
            hashed_password: new.hashed_password,
            role: new.role,
            created_at: now,
            updated_at: now,
        };

        let mut principals = self.principals.lock().unwrap();
        principals.push(principal.clone());
        drop(principals);

        Ok(principal)
    }
}
