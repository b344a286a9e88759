//! Minimal 2D rigid-body physics: gravity, semi-implicit Euler integration,
//! exhaustive pairwise collision detection and impulse-based resolution.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Aabb, Contact};
pub use error::{BodyError, ShapeError};
pub use math::{Transform, Vec2};
pub use objects::{BodyConfig, CollisionEvent, RigidBody, COLLISION_EVENT};
pub use shapes::{Circle, Polygon, Rectangle, Shape, ShapeKind};
pub use world::{BodyHandle, PhysicsWorld, WorldConfig};
