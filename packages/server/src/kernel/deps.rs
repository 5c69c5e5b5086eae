//! Server dependencies (using traits for testability)
//!
//! The stores are built once at startup and injected into the router;
//! no module-level singleton connection state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::events::models::event::PgEventStore;
use crate::domains::membership::models::membership::PgMembershipStore;
use crate::kernel::{BaseEventStore, BaseMembershipStore};

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub events: Arc<dyn BaseEventStore>,
    pub memberships: Arc<dyn BaseMembershipStore>,
}

impl ServerDeps {
    /// Production wiring: both stores backed by the shared Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            events: Arc::new(PgEventStore::new(pool.clone())),
            memberships: Arc::new(PgMembershipStore::new(pool)),
        }
    }
}
