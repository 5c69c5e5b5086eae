//! Leave event action

use tracing::info;

use crate::common::ApiError;
use crate::domains::membership::actions::require_pair;
use crate::kernel::ServerDeps;

/// Remove a user's membership for an event. The pair is matched by string
/// equality only; no identifier-format revalidation.
pub async fn leave_event(
    event_id: Option<String>,
    user_email: Option<String>,
    deps: &ServerDeps,
) -> Result<(), ApiError> {
    let (event_id, user_email) = require_pair(event_id, user_email)?;

    if !deps.memberships.delete_pair(&event_id, &user_email).await? {
        return Err(ApiError::NotJoined);
    }

    info!(event_id = %event_id, user_email = %user_email, "user left event");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::membership::actions::{check_joined, join_event};

    #[tokio::test]
    async fn join_then_leave_clears_membership() {
        let deps = ServerDeps::mock();
        let event_id = Some("evt-1".to_string());
        let email = Some("user@example.org".to_string());

        join_event(event_id.clone(), email.clone(), &deps).await.unwrap();
        leave_event(event_id.clone(), email.clone(), &deps).await.unwrap();

        assert!(!check_joined(event_id, email, &deps).await.unwrap());
    }

    #[tokio::test]
    async fn leave_without_join_is_not_joined() {
        let deps = ServerDeps::mock();
        assert!(matches!(
            leave_event(
                Some("evt-1".to_string()),
                Some("stranger@example.org".to_string()),
                &deps
            )
            .await,
            Err(ApiError::NotJoined)
        ));
    }
}
