pub mod membership;

pub use membership::*;
