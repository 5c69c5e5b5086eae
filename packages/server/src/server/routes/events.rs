use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domains::events::actions::{
    create_event, delete_event, get_event, list_events, update_event,
};
use crate::domains::events::data::{CreateEventRequest, EventData, UpdateEventRequest};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct EventCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: EventData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
    pub created_by: Option<String>,
}

/// POST /events
pub async fn create_event_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventCreatedResponse>), ApiError> {
    let event = create_event(req, &state.deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            success: true,
            message: "Event created successfully!".to_string(),
            data: event.into(),
        }),
    ))
}

/// GET /events?createdBy=
///
/// Bare array body, newest first.
pub async fn list_events_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<Json<Vec<EventData>>, ApiError> {
    let events = list_events(params.created_by.as_deref(), &state.deps).await?;
    Ok(Json(events.into_iter().map(EventData::from).collect()))
}

/// GET /events/:id
pub async fn get_event_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventData>, ApiError> {
    let event = get_event(&id, &state.deps).await?;
    Ok(Json(event.into()))
}

/// PUT /events/:id
pub async fn update_event_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    update_event(&id, req, &state.deps).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Event updated successfully".to_string(),
    }))
}

/// DELETE /events/:id
pub async fn delete_event_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_event(&id, &state.deps).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Event deleted successfully".to_string(),
    }))
}
