use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::kernel::BaseMembershipStore;

/// Membership model - SQL persistence layer
///
/// `event_id` is the canonical string form of an event identifier, stored as
/// TEXT. It is not a foreign key: the platform tolerates orphaned and
/// malformed references, and join/leave never validate the format.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Membership {
    pub id: Uuid,
    pub event_id: String,
    pub user_email: String,
    pub joined_at: DateTime<Utc>,
}

/// Postgres-backed membership store
///
/// At-most-one membership per (event_id, user_email) pair is enforced by the
/// table's unique constraint, so the duplicate check and the insert are one
/// atomic statement rather than two round trips.
pub struct PgMembershipStore {
    pool: PgPool,
}

impl PgMembershipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseMembershipStore for PgMembershipStore {
    async fn insert(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>> {
        // No row back means the unique constraint swallowed the insert:
        // the pair is already joined.
        sqlx::query_as::<_, Membership>(
            "INSERT INTO event_members (event_id, user_email)
             VALUES ($1, $2)
             ON CONFLICT (event_id, user_email) DO NOTHING
             RETURNING *",
        )
        .bind(event_id)
        .bind(user_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find_pair(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM event_members WHERE event_id = $1 AND user_email = $2",
        )
        .bind(event_id)
        .bind(user_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn delete_pair(&self, event_id: &str, user_email: &str) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM event_members WHERE event_id = $1 AND user_email = $2")
                .bind(event_id)
                .bind(user_email)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_user(&self, user_email: &str) -> Result<Vec<Membership>> {
        sqlx::query_as::<_, Membership>("SELECT * FROM event_members WHERE user_email = $1")
            .bind(user_email)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}
