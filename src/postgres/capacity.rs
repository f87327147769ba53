use async_trait::async_trait;
use sqlx::PgPool;

use crate::repository::CapacityRepository;
use crate::AuthError;

/// `PostgreSQL`-backed capacity store.
///
/// # Table Schema
///
/// ```sql
/// CREATE TABLE class_slots (
///     resource_id VARCHAR(64) PRIMARY KEY,
///     remaining INTEGER NOT NULL CHECK (remaining >= 0),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
#[derive(Clone)]
pub struct PostgresCapacityRepository {
    pool: PgPool,
}

impl PostgresCapacityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CapacityRepository for PostgresCapacityRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn try_claim(&self, resource_id: &str) -> Result<bool, AuthError> {
        // One conditional UPDATE; the WHERE clause carries the whole
        // decision, so racing claimers for the last unit serialize in the
        // database and exactly one row-match succeeds.
        let result = sqlx::query(
            "UPDATE class_slots \
             SET remaining = remaining - 1, updated_at = NOW() \
             WHERE resource_id = $1 AND remaining > 0",
        )
        .bind(resource_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "vestibule", "msg=\"database error\", operation=\"claim_slot\", error=\"{e}\"");
            AuthError::Database(e.to_string())
        })?;

        Ok(result.rows_affected() == 1)
    }
}
