pub mod events;
pub mod rigid_body;

pub use events::{CollisionEvent, EventListeners, COLLISION_EVENT};
pub use rigid_body::{BodyConfig, RigidBody};
