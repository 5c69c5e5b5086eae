//! Update event action - partial merge of supplied fields

use tracing::info;

use crate::common::ApiError;
use crate::domains::events::actions::parse_event_id;
use crate::domains::events::data::UpdateEventRequest;
use crate::domains::events::models::event::EventPatch;
use crate::kernel::ServerDeps;

/// Apply a partial update to an event. Only supplied fields are overwritten;
/// required fields are not re-validated, so an update may blank one out.
pub async fn update_event(
    id: &str,
    req: UpdateEventRequest,
    deps: &ServerDeps,
) -> Result<(), ApiError> {
    let id = parse_event_id(id)?;

    let patch = EventPatch {
        title: req.title,
        description: req.description,
        event_type: req.event_type,
        thumbnail: req.thumbnail,
        location: req.location,
        date: req.date,
        created_by: req.created_by,
    };

    if !deps.events.update(id, patch).await? {
        return Err(ApiError::EventNotFound);
    }

    info!(event_id = %id, "event updated");
    Ok(())
}
