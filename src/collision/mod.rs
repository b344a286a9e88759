pub mod aabb;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use aabb::Aabb;
pub use detection::*;
pub use manifold::{Contact, Penetration};
