use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::kernel::BaseEventStore;

/// Event model - SQL persistence layer
///
/// All caller-supplied fields are opaque strings (`date` included); the store
/// stamps `id` and `created_at` on insert.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub thumbnail: String,
    pub location: String,
    pub date: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for event creation (every field present and non-empty)
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub thumbnail: String,
    pub location: String,
    pub date: String,
    pub created_by: String,
}

/// Partial update: only `Some` fields are written. Required fields are not
/// re-validated on update, so a caller may blank one out.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub thumbnail: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub created_by: Option<String>,
}

/// Postgres-backed event store
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseEventStore for PgEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (
                title,
                description,
                event_type,
                thumbnail,
                location,
                date,
                created_by
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.event_type)
        .bind(&event.thumbnail)
        .bind(&event.location)
        .bind(&event.date)
        .bind(&event.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find_all(&self, created_by: Option<&str>) -> Result<Vec<Event>> {
        match created_by {
            Some(creator) => {
                sqlx::query_as::<_, Event>(
                    "SELECT * FROM events WHERE created_by = $1 ORDER BY created_at DESC",
                )
                .bind(creator)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(Into::into)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                event_type = COALESCE($4, event_type),
                thumbnail = COALESCE($5, thumbnail),
                location = COALESCE($6, location),
                date = COALESCE($7, date),
                created_by = COALESCE($8, created_by)
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.event_type)
        .bind(patch.thumbnail)
        .bind(patch.location)
        .bind(patch.date)
        .bind(patch.created_by)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
