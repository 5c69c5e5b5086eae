// Mock store implementations for testing
//
// In-memory doubles for the Base* store traits. Used by unit tests and the
// router-level integration tests so the full HTTP surface runs without
// Postgres. The mock membership store guards its uniqueness check and insert
// under one lock, mirroring the unique-constraint guarantee of the real store.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domains::events::models::event::{Event, EventPatch, NewEvent};
use crate::domains::membership::models::membership::Membership;
use crate::kernel::{BaseEventStore, BaseMembershipStore, ServerDeps};

// =============================================================================
// Mock Event Store
// =============================================================================

#[derive(Default)]
pub struct MockEventStore {
    rows: Arc<Mutex<Vec<Event>>>,
}

impl MockEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseEventStore for MockEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event> {
        let mut rows = self.rows.lock().unwrap();

        // Keep created_at strictly increasing so newest-first ordering is
        // deterministic even for back-to-back inserts.
        let mut created_at = Utc::now();
        if let Some(last) = rows.last() {
            if created_at <= last.created_at {
                created_at = last.created_at + Duration::microseconds(1);
            }
        }

        let row = Event {
            id: Uuid::new_v4(),
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            thumbnail: event.thumbnail,
            location: event.location,
            date: event.date,
            created_by: event.created_by,
            created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_all(&self, created_by: Option<&str>) -> Result<Vec<Event>> {
        let rows = self.rows.lock().unwrap();
        let mut events: Vec<Event> = rows
            .iter()
            .filter(|e| created_by.map_or(true, |c| e.created_by == c))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|e| ids.contains(&e.id)).cloned().collect())
    }

    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                if let Some(title) = patch.title {
                    event.title = title;
                }
                if let Some(description) = patch.description {
                    event.description = description;
                }
                if let Some(event_type) = patch.event_type {
                    event.event_type = event_type;
                }
                if let Some(thumbnail) = patch.thumbnail {
                    event.thumbnail = thumbnail;
                }
                if let Some(location) = patch.location {
                    event.location = location;
                }
                if let Some(date) = patch.date {
                    event.date = date;
                }
                if let Some(created_by) = patch.created_by {
                    event.created_by = created_by;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

// =============================================================================
// Mock Membership Store
// =============================================================================

#[derive(Default)]
pub struct MockMembershipStore {
    rows: Arc<Mutex<Vec<Membership>>>,
}

impl MockMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseMembershipStore for MockMembershipStore {
    async fn insert(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>> {
        // Check and insert under one lock: concurrent joins for the same pair
        // cannot both pass the check.
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|m| m.event_id == event_id && m.user_email == user_email)
        {
            return Ok(None);
        }

        let row = Membership {
            id: Uuid::new_v4(),
            event_id: event_id.to_string(),
            user_email: user_email.to_string(),
            joined_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(Some(row))
    }

    async fn find_pair(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|m| m.event_id == event_id && m.user_email == user_email)
            .cloned())
    }

    async fn delete_pair(&self, event_id: &str, user_email: &str) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| !(m.event_id == event_id && m.user_email == user_email));
        Ok(rows.len() < before)
    }

    async fn find_by_user(&self, user_email: &str) -> Result<Vec<Membership>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| m.user_email == user_email)
            .cloned()
            .collect())
    }
}

// =============================================================================
// Test wiring
// =============================================================================

impl ServerDeps {
    /// Mock wiring: both stores in-memory.
    pub fn mock() -> Self {
        Self {
            events: Arc::new(MockEventStore::new()),
            memberships: Arc::new(MockMembershipStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event(title: &str, created_by: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "desc".to_string(),
            event_type: "Cleanup".to_string(),
            thumbnail: "https://example.org/t.png".to_string(),
            location: "Dhaka".to_string(),
            date: "2026-09-01".to_string(),
            created_by: created_by.to_string(),
        }
    }

    #[tokio::test]
    async fn events_are_listed_newest_first() {
        let store = MockEventStore::new();
        store.insert(new_event("first", "a@b.c")).await.unwrap();
        store.insert(new_event("second", "a@b.c")).await.unwrap();
        store.insert(new_event("third", "a@b.c")).await.unwrap();

        let titles: Vec<String> = store
            .find_all(None)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn duplicate_pair_insert_returns_none() {
        let store = MockMembershipStore::new();
        assert!(store.insert("abc", "a@b.c").await.unwrap().is_some());
        assert!(store.insert("abc", "a@b.c").await.unwrap().is_none());
        assert_eq!(store.find_by_user("a@b.c").await.unwrap().len(), 1);
    }
}
