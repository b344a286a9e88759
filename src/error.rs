use thiserror::Error;

/// Errors raised when constructing shape geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("rectangle extents must be positive and finite, got {width} x {height}")]
    InvalidExtents { width: f64, height: f64 },

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon vertex {0} is not finite")]
    NonFiniteVertex(usize),
}

/// Errors raised when building a rigid body from a [`BodyConfig`](crate::BodyConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f64),

    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),
}
