use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Axis-aligned box centered on the owning body's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleDef")]
pub struct Rectangle {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RectangleDef {
    width: f64,
    height: f64,
}

impl TryFrom<RectangleDef> for Rectangle {
    type Error = ShapeError;

    fn try_from(def: RectangleDef) -> Result<Self, Self::Error> {
        Rectangle::try_new(def.width, def.height)
    }
}

impl Rectangle {
    /// Creates a rectangle, panicking on non-positive extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self::try_new(width, height).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(ShapeError::InvalidExtents { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Point test in the rectangle's local frame, edges inclusive.
    pub fn contains_local(&self, local: Vec2) -> bool {
        let half = self.half_extents();
        local.x >= -half.x && local.x <= half.x && local.y >= -half.y && local.y <= half.y
    }

    pub fn inertia(&self, mass: f64) -> f64 {
        mass * (self.width * self.width + self.height * self.height) / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rectangle_new() {
        let r = Rectangle::new(4.0, 2.0);
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.half_extents(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_rectangle_try_new_rejects_bad_extents() {
        assert_eq!(
            Rectangle::try_new(1.0, -2.0),
            Err(ShapeError::InvalidExtents { width: 1.0, height: -2.0 })
        );
        assert!(Rectangle::try_new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_rectangle_contains_local() {
        let r = Rectangle::new(2.0, 1.0);
        assert!(r.contains_local(Vec2::ZERO));
        assert!(r.contains_local(Vec2::new(1.0, 0.5))); // corner
        assert!(!r.contains_local(Vec2::new(1.01, 0.0)));
        assert!(!r.contains_local(Vec2::new(0.0, -0.51)));
    }

    #[test]
    fn test_rectangle_inertia() {
        // m * (w^2 + h^2) / 12 = 6 * (9 + 1) / 12 = 5
        assert!((Rectangle::new(3.0, 1.0).inertia(6.0) - 5.0).abs() < EPSILON);
    }
}
