use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

/// Narrow-phase result for one pair of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit normal pointing from shape A towards shape B.
    pub normal: Vec2,
    /// How far the shapes overlap along `normal`.
    pub depth: f64,
}

/// Stores information about a collision between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The first body involved in the collision.
    pub body_a: BodyHandle,
    /// The second body involved in the collision.
    pub body_b: BodyHandle,
    /// The collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// The amount of penetration between the shapes.
    pub depth: f64,
}
