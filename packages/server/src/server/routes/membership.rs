use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domains::events::data::EventData;
use crate::domains::membership::actions::{check_joined, join_event, leave_event, list_joined};
use crate::domains::membership::data::MembershipData;
use crate::server::app::AppState;
use crate::server::routes::events::MessageResponse;

/// Join/leave payload. Fields stay optional so missing data answers with the
/// registry's own 400 body.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub event_id: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Serialize)]
pub struct JoinedResponse {
    pub success: bool,
    pub message: String,
    pub data: MembershipData,
}

#[derive(Serialize)]
pub struct CheckJoinedResponse {
    pub success: bool,
    pub joined: bool,
}

#[derive(Serialize)]
pub struct JoinedEventsResponse {
    pub success: bool,
    pub events: Vec<EventData>,
}

/// POST /events/join
pub async fn join_event_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<MembershipRequest>,
) -> Result<(StatusCode, Json<JoinedResponse>), ApiError> {
    let membership = join_event(req.event_id, req.user_email, &state.deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinedResponse {
            success: true,
            message: "Joined event successfully!".to_string(),
            data: membership.into(),
        }),
    ))
}

/// POST /events/leave
pub async fn leave_event_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<MembershipRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    leave_event(req.event_id, req.user_email, &state.deps).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Left event successfully!".to_string(),
    }))
}

/// GET /events/join/check?eventId=&userEmail=
pub async fn check_joined_handler(
    Extension(state): Extension<AppState>,
    Query(req): Query<MembershipRequest>,
) -> Result<Json<CheckJoinedResponse>, ApiError> {
    let joined = check_joined(req.event_id, req.user_email, &state.deps).await?;

    Ok(Json(CheckJoinedResponse {
        success: true,
        joined,
    }))
}

/// GET /events/joined/:email
pub async fn joined_events_handler(
    Extension(state): Extension<AppState>,
    Path(email): Path<String>,
) -> Result<Json<JoinedEventsResponse>, ApiError> {
    let events = list_joined(&email, &state.deps).await?;

    Ok(Json(JoinedEventsResponse {
        success: true,
        events: events.into_iter().map(EventData::from).collect(),
    }))
}
