use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Circle, Rectangle, Shape};
use super::aabb::Aabb;
use super::manifold::Penetration;

/// Narrow phase for a pair of bodies; the normal points from `body_a` to `body_b`.
pub fn check_bodies(body_a: &RigidBody, body_b: &RigidBody) -> Option<Penetration> {
    check_collision(body_a.shape(), body_a.position, body_b.shape(), body_b.position)
}

/// Dispatches on the shape pairing. Circle–rectangle and anything involving a
/// polygon are not supported and never report a collision.
///
/// Swapping the arguments flips the normal, except when the centers coincide
/// on the separating axis: there is no direction to flip, so the normal is
/// `+axis` for either order and `shape_b` is the one pushed along it. The world
/// always passes the body with the older handle as `shape_a`.
pub fn check_collision(
    shape_a: &Shape,
    pos_a: Vec2,
    shape_b: &Shape,
    pos_b: Vec2,
) -> Option<Penetration> {
    match (shape_a, shape_b) {
        (Shape::Circle(a), Shape::Circle(b)) => check_circle_circle(a, pos_a, b, pos_b),
        (Shape::Rectangle(a), Shape::Rectangle(b)) => check_rectangle_rectangle(a, pos_a, b, pos_b),
        (Shape::Circle(_), Shape::Rectangle(_)) | (Shape::Rectangle(_), Shape::Circle(_)) => None,
        (Shape::Polygon(_), _) | (_, Shape::Polygon(_)) => None,
    }
}

/// Checks for collision between two circles.
pub fn check_circle_circle(
    circle_a: &Circle,
    pos_a: Vec2,
    circle_b: &Circle,
    pos_b: Vec2,
) -> Option<Penetration> {
    let dist_vec = pos_b - pos_a;
    let distance = dist_vec.magnitude();
    let radii_sum = circle_a.radius() + circle_b.radius();

    if distance >= radii_sum {
        return None;
    }

    let normal = if distance > 0.0 {
        dist_vec.normalize()
    } else {
        // Concentric circles: no separation direction, B goes along +y
        Vec2::new(0.0, 1.0)
    };

    Some(Penetration { normal, depth: radii_sum - distance })
}

/// Checks for collision between two axis-aligned rectangles.
/// The normal lies on the axis of least overlap, signed from A's center towards B's.
pub fn check_rectangle_rectangle(
    rect_a: &Rectangle,
    pos_a: Vec2,
    rect_b: &Rectangle,
    pos_b: Vec2,
) -> Option<Penetration> {
    let box_a = Aabb::from_center_half_extents(pos_a, rect_a.half_extents());
    let box_b = Aabb::from_center_half_extents(pos_b, rect_b.half_extents());
    let overlap = box_a.overlap(&box_b)?;

    let delta = pos_b - pos_a;
    // Coincident centers resolve to +axis whatever the argument order
    let sign = |d: f64| if d < 0.0 { -1.0 } else { 1.0 };

    let penetration = if overlap.x < overlap.y {
        Penetration { normal: Vec2::new(sign(delta.x), 0.0), depth: overlap.x }
    } else {
        Penetration { normal: Vec2::new(0.0, sign(delta.y)), depth: overlap.y }
    };
    Some(penetration)
}
