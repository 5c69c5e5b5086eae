// Infrastructure layer: store traits, the dependency container, and
// in-memory doubles for testing.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::*;
pub use traits::*;
