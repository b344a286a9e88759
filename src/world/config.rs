//! World tuning parameters.

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// Default gravity, in units/second² with +y pointing down.
pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 9.8 };

/// Configuration for a [`PhysicsWorld`](super::PhysicsWorld).
///
/// Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Acceleration applied to every non-static body each step.
    pub gravity: Vec2,

    /// Share of the penetration removed by positional correction (1.0 = all of it).
    pub correction_percent: f64,

    /// Penetration depth tolerated without correction.
    pub correction_slop: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            correction_percent: 1.0,
            correction_slop: 0.0,
        }
    }
}
