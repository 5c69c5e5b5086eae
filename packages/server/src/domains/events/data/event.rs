use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::events::models::event::Event;

/// Event wire type
///
/// Public API representation of an event. Field names are camelCase on the
/// wire (`eventType`, `createdBy`, ...) matching the platform's JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub thumbnail: String,
    pub location: String,
    pub date: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            thumbnail: event.thumbnail,
            location: event.location,
            date: event.date,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

/// Creation payload. Every field is optional at the wire level so presence
/// validation can answer with the platform's 400 body instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub thumbnail: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update payload; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub thumbnail: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub created_by: Option<String>,
}
