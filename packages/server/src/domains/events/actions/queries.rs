//! Event query actions
//!
//! Queries return model rows; the route layer converts to wire types.

use tracing::debug;

use crate::common::ApiError;
use crate::domains::events::actions::parse_event_id;
use crate::domains::events::models::event::Event;
use crate::kernel::ServerDeps;

/// All events, optionally restricted to a creator, newest first.
/// Unbounded: pagination is deliberately out of scope.
pub async fn list_events(
    created_by: Option<&str>,
    deps: &ServerDeps,
) -> Result<Vec<Event>, ApiError> {
    debug!(created_by = ?created_by, "listing events");
    Ok(deps.events.find_all(created_by).await?)
}

/// Fetch a single event by its identifier.
pub async fn get_event(id: &str, deps: &ServerDeps) -> Result<Event, ApiError> {
    let id = parse_event_id(id)?;

    deps.events
        .find_by_id(id)
        .await?
        .ok_or(ApiError::EventNotFound)
}
