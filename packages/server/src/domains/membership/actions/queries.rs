//! Membership query actions

use tracing::debug;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::events::models::event::Event;
use crate::domains::membership::actions::require_pair;
use crate::kernel::ServerDeps;

/// Whether the user has joined the event. Side-effect free.
pub async fn check_joined(
    event_id: Option<String>,
    user_email: Option<String>,
    deps: &ServerDeps,
) -> Result<bool, ApiError> {
    let (event_id, user_email) = require_pair(event_id, user_email)?;

    let existing = deps.memberships.find_pair(&event_id, &user_email).await?;
    Ok(existing.is_some())
}

/// All events a user has joined, resolved through one batch lookup.
///
/// Stored event ids that are not well-formed identifiers (legacy or orphaned
/// data) are silently skipped rather than surfaced as errors. An empty
/// membership set short-circuits without touching the event store.
pub async fn list_joined(user_email: &str, deps: &ServerDeps) -> Result<Vec<Event>, ApiError> {
    let memberships = deps.memberships.find_by_user(user_email).await?;
    if memberships.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = memberships
        .iter()
        .filter_map(|m| Uuid::parse_str(&m.event_id).ok())
        .collect();

    if ids.len() < memberships.len() {
        debug!(
            user_email = %user_email,
            skipped = memberships.len() - ids.len(),
            "skipping malformed event ids in joined list"
        );
    }
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(deps.events.find_by_ids(&ids).await?)
}
