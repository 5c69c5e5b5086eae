//! Create event action - presence validation then insert

use tracing::info;

use crate::common::ApiError;
use crate::domains::events::data::CreateEventRequest;
use crate::domains::events::models::event::{Event, NewEvent};
use crate::kernel::ServerDeps;

/// Create a new event.
///
/// Every required field must be present and non-empty; `created_at` is
/// stamped by the store and never caller-controlled.
pub async fn create_event(req: CreateEventRequest, deps: &ServerDeps) -> Result<Event, ApiError> {
    let new_event = NewEvent {
        title: required(req.title)?,
        description: required(req.description)?,
        event_type: required(req.event_type)?,
        thumbnail: required(req.thumbnail)?,
        location: required(req.location)?,
        date: required(req.date)?,
        created_by: required(req.created_by)?,
    };

    let event = deps.events.insert(new_event).await?;
    info!(event_id = %event.id, created_by = %event.created_by, "event created");

    Ok(event)
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::MissingFields),
    }
}
