//! Delete event action

use tracing::info;

use crate::common::ApiError;
use crate::domains::events::actions::parse_event_id;
use crate::kernel::ServerDeps;

/// Remove an event. Memberships referencing it are intentionally left in
/// place; `list_joined` tolerates the resulting orphans.
pub async fn delete_event(id: &str, deps: &ServerDeps) -> Result<(), ApiError> {
    let id = parse_event_id(id)?;

    if !deps.events.delete(id).await? {
        return Err(ApiError::EventNotFound);
    }

    info!(event_id = %id, "event deleted");
    Ok(())
}
