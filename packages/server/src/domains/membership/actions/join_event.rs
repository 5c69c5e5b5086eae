//! Join event action - duplicate-safe membership creation

use tracing::info;

use crate::common::ApiError;
use crate::domains::membership::actions::require_pair;
use crate::domains::membership::models::membership::Membership;
use crate::kernel::ServerDeps;

/// Register a user for an event.
///
/// The duplicate check rides on the store's atomic insert: a second join for
/// the same pair is an `AlreadyJoined` error, never a silent no-op, and
/// concurrent joins cannot both succeed.
pub async fn join_event(
    event_id: Option<String>,
    user_email: Option<String>,
    deps: &ServerDeps,
) -> Result<Membership, ApiError> {
    let (event_id, user_email) = require_pair(event_id, user_email)?;

    match deps.memberships.insert(&event_id, &user_email).await? {
        Some(membership) => {
            info!(event_id = %membership.event_id, user_email = %membership.user_email, "user joined event");
            Ok(membership)
        }
        None => Err(ApiError::AlreadyJoined),
    }
}
