//! Event repository actions
//!
//! One file per mutation plus `queries.rs`, all taking `&ServerDeps` last.

pub mod create_event;
pub mod delete_event;
pub mod queries;
pub mod update_event;

pub use create_event::*;
pub use delete_event::*;
pub use queries::*;
pub use update_event::*;

use uuid::Uuid;

use crate::common::ApiError;

/// Parse a path identifier, rejecting malformed values before any store
/// access.
pub(crate) fn parse_event_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::InvalidEventId)
}
