use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::membership::models::membership::Membership;

/// Membership wire type (camelCase field names)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipData {
    pub id: String,
    pub event_id: String,
    pub user_email: String,
    pub joined_at: DateTime<Utc>,
}

impl From<Membership> for MembershipData {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            event_id: membership.event_id,
            user_email: membership.user_email,
            joined_at: membership.joined_at,
        }
    }
}
