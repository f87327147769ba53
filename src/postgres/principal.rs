use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repository::{NewPrincipal, Principal, PrincipalRepository};
use crate::roles::Role;
use crate::AuthError;

/// `PostgreSQL`-backed principal store.
///
/// # Table Schema
///
/// ```sql
/// CREATE TABLE principals (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(100) NOT NULL,
///     email VARCHAR(254) UNIQUE,
///     phone VARCHAR(32) UNIQUE,
///     birth_date DATE,
///     hashed_password TEXT NOT NULL,
///     role VARCHAR(16) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// The UNIQUE indexes on email and phone are the real guarantee against a
/// concurrent double-registration; the action-level duplicate check is a
/// fast path.
#[derive(Clone)]
pub struct PostgresPrincipalRepository {
    pool: PgPool,
}

impl PostgresPrincipalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PrincipalRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    hashed_password: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PrincipalRow> for Principal {
    fn from(row: PrincipalRow) -> Self {
        Principal {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            birth_date: row.birth_date,
            hashed_password: row.hashed_password,
            // rows written before the role column was backfilled decode as guest
            role: row.role.parse::<Role>().unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn database_error(operation: &str, e: &sqlx::Error) -> AuthError {
    log::error!(target: "vestibule", "msg=\"database error\", operation=\"{operation}\", error=\"{e}\"");
    AuthError::Database(e.to_string())
}

#[async_trait]
impl PrincipalRepository for PostgresPrincipalRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, AuthError> {
        let row: Option<PrincipalRow> =
            sqlx::query_as("SELECT id, name, email, phone, birth_date, hashed_password, role, created_at, updated_at FROM principals WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_principal_by_id", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, AuthError> {
        let row: Option<PrincipalRow> =
            sqlx::query_as("SELECT id, name, email, phone, birth_date, hashed_password, role, created_at, updated_at FROM principals WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_principal_by_email", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Principal>, AuthError> {
        let row: Option<PrincipalRow> =
            sqlx::query_as("SELECT id, name, email, phone, birth_date, hashed_password, role, created_at, updated_at FROM principals WHERE phone = $1")
                .bind(phone)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_principal_by_phone", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    async fn create(&self, new: NewPrincipal) -> Result<Principal, AuthError> {
        let row: PrincipalRow = sqlx::query_as(
            "INSERT INTO principals (name, email, phone, birth_date, hashed_password, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, email, phone, birth_date, hashed_password, role, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(new.birth_date)
        .bind(&new.hashed_password)
        .bind(new.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // losing the check-then-insert race lands here via the backstop index
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                match db.constraint() {
                    Some(constraint) if constraint.contains("phone") => AuthError::PhoneTaken,
                    _ => AuthError::EmailTaken,
                }
            }
            _ => database_error("create_principal", &e),
        })?;

        Ok(row.into())
    }
}
