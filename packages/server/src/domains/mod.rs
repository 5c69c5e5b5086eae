pub mod events;
pub mod membership;
