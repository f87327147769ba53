use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;
use crate::AuthError;

/// A registered identity record.
///
/// At most one principal exists per non-null email and per non-null phone.
/// The role is set once at creation and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// The identity to put in a token's subject claim: the email, falling
    /// back to the id for principals registered without one.
    #[must_use]
    pub fn subject(&self) -> String {
        self.email
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}

#[cfg(any(test, feature = "mocks"))]
impl Principal {
    pub fn mock() -> Self {
        Self::mock_with("test@example.com", "fakehashedpassword", Role::Member)
    }

    pub fn mock_with(email: &str, hashed_password: &str, role: Role) -> Self {
        let now = Utc::now();
        Principal {
            id: Uuid::new_v4(),
            name: "Test User".to_owned(),
            email: Some(email.to_owned()),
            phone: None,
            birth_date: None,
            hashed_password: hashed_password.to_owned(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields supplied when creating a principal; the store assigns the id and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hashed_password: String,
    pub role: Role,
}

#[async_trait]
pub trait PrincipalRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, AuthError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, AuthError>;
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Principal>, AuthError>;
    async fn create(&self, new: NewPrincipal) -> Result<Principal, AuthError>;
}
