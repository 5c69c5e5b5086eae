// HTTP routes
pub mod events;
pub mod health;
pub mod membership;

pub use events::*;
pub use health::*;
pub use membership::*;
