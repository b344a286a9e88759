pub mod circle;
pub mod polygon;
pub mod rectangle;

// Re-export the specific shape types
pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use serde::{Deserialize, Serialize};

use crate::collision::Aabb;
use crate::math::{Transform, Vec2};

/// Discriminator of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Polygon,
}

/// Enum representing the geometric shape of a rigid body.
///
/// Geometry is expressed in the body's local frame and never changes after
/// construction; only the owning body's position moves it through the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle::new(radius))
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle(Rectangle::new(width, height))
    }

    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Shape::Polygon(Polygon::new(vertices))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Tests a world-space point against this shape placed at `body_position`
    /// and turned by `body_angle` radians.
    pub fn contains_point(&self, point: Vec2, body_position: Vec2, body_angle: f64) -> bool {
        let local = Transform::new(body_position, body_angle).to_local(point);
        match self {
            Shape::Circle(c) => c.contains_local(local),
            Shape::Rectangle(r) => r.contains_local(local),
            Shape::Polygon(p) => p.contains_local(local),
        }
    }

    /// Moment of inertia about the shape's center for a body of `mass`.
    /// Informational only; the integrator does not apply rotational dynamics.
    pub fn inertia(&self, mass: f64) -> f64 {
        match self {
            Shape::Circle(c) => c.inertia(mass),
            Shape::Rectangle(r) => r.inertia(mass),
            Shape::Polygon(p) => p.inertia(mass),
        }
    }

    /// World-space bounds of the shape at `position` (unrotated).
    pub fn aabb(&self, position: Vec2) -> Aabb {
        match self {
            Shape::Circle(c) => {
                Aabb::from_center_half_extents(position, Vec2::new(c.radius(), c.radius()))
            }
            Shape::Rectangle(r) => Aabb::from_center_half_extents(position, r.half_extents()),
            Shape::Polygon(p) => {
                let world: Vec<Vec2> = p.vertices().iter().map(|&v| v + position).collect();
                // Polygon always holds at least 3 vertices
                Aabb::from_points(&world).unwrap_or_else(|| Aabb::new(position, position))
            }
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
