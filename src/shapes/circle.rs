use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleDef")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
struct CircleDef {
    radius: f64,
}

impl TryFrom<CircleDef> for Circle {
    type Error = ShapeError;

    fn try_from(def: CircleDef) -> Result<Self, Self::Error> {
        Circle::try_new(def.radius)
    }
}

impl Circle {
    /// Creates a circle, panicking on a non-positive radius.
    pub fn new(radius: f64) -> Self {
        Self::try_new(radius).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(radius: f64) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point test in the circle's local frame (center at the origin).
    pub fn contains_local(&self, local: Vec2) -> bool {
        local.magnitude() <= self.radius
    }

    /// Moment of inertia of a solid disc about its center.
    pub fn inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0);
        assert_eq!(c.radius(), 5.0);
    }

    #[test]
    #[should_panic]
    fn test_circle_new_negative_radius() {
        Circle::new(-1.0);
    }

    #[test]
    fn test_circle_try_new_rejects_zero_and_nan() {
        assert_eq!(Circle::try_new(0.0), Err(ShapeError::InvalidRadius(0.0)));
        assert!(Circle::try_new(f64::NAN).is_err());
    }

    #[test]
    fn test_circle_contains_local_boundary_inclusive() {
        let c = Circle::new(1.0);
        assert!(c.contains_local(Vec2::ZERO));
        assert!(c.contains_local(Vec2::new(1.0, 0.0)));
        assert!(!c.contains_local(Vec2::new(0.8, 0.8)));
    }

    #[test]
    fn test_circle_inertia() {
        assert_eq!(Circle::new(2.0).inertia(10.0), 20.0);
    }
}
