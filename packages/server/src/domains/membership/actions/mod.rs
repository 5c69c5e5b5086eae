//! Membership registry actions
//!
//! The registry enforces at-most-one membership per (event, user) pair and
//! resolves membership records back into full event views.

pub mod join_event;
pub mod leave_event;
pub mod queries;

pub use join_event::*;
pub use leave_event::*;
pub use queries::*;

use crate::common::ApiError;

/// Presence check shared by join/leave/check. Event ids are accepted as-is:
/// the membership key is the caller's string, never parsed.
pub(crate) fn require_pair(
    event_id: Option<String>,
    user_email: Option<String>,
) -> Result<(String, String), ApiError> {
    match (event_id, user_email) {
        (Some(event_id), Some(user_email))
            if !event_id.trim().is_empty() && !user_email.trim().is_empty() =>
        {
            Ok((event_id, user_email))
        }
        _ => Err(ApiError::MissingData),
    }
}
