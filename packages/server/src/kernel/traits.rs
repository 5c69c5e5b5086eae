// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The membership
// rules (duplicate rejection, orphan tolerance) live in domain actions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseEventStore)

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::events::models::event::{Event, EventPatch, NewEvent};
use crate::domains::membership::models::membership::Membership;

// =============================================================================
// Event Store Trait
// =============================================================================

#[async_trait]
pub trait BaseEventStore: Send + Sync {
    /// Persist a new event; the store stamps `id` and `created_at`.
    async fn insert(&self, event: NewEvent) -> Result<Event>;

    /// All events, optionally restricted to a creator, newest first.
    async fn find_all(&self, created_by: Option<&str>) -> Result<Vec<Event>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// Batch lookup; ids with no matching event are simply absent from the
    /// result. No guaranteed order.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>>;

    /// Partial merge: only the supplied fields are overwritten.
    /// Returns false when no event matched the id.
    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<bool>;

    /// Returns false when no event matched the id. Dependent memberships are
    /// left in place (orphans are tolerated).
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

// =============================================================================
// Membership Store Trait
// =============================================================================

/// Membership keys are the canonical string form of an event id paired with a
/// user email. The store enforces at-most-one record per pair; the event id
/// is never validated as a well-formed identifier here.
#[async_trait]
pub trait BaseMembershipStore: Send + Sync {
    /// Insert a membership for the pair, atomically with the uniqueness
    /// check. Returns None when the pair already exists.
    async fn insert(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>>;

    async fn find_pair(&self, event_id: &str, user_email: &str) -> Result<Option<Membership>>;

    /// Returns false when no membership matched the pair.
    async fn delete_pair(&self, event_id: &str, user_email: &str) -> Result<bool>;

    async fn find_by_user(&self, user_email: &str) -> Result<Vec<Membership>>;
}
