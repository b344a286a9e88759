use super::vec2::Vec2;

/// Placement of a body's local frame in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub angle: f64, // Radians, counter-clockwise
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, angle: f64) -> Self {
        Self { position, angle }
    }

    /// Maps a world-space point into the local frame (translate back, then rotate by -angle).
    pub fn to_local(self, world: Vec2) -> Vec2 {
        let translated = world - self.position;
        if self.angle == 0.0 {
            return translated;
        }
        translated.rotate(-self.angle)
    }
}
