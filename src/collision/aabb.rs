use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new Aabb, ordering the corners component-wise.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Box spanning `center ± half`.
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Aabb::new(center - half, center + half)
    }

    /// Overlap length on each axis, or `None` when either axis is separated.
    /// Touching edges do not count.
    pub fn overlap(&self, other: &Aabb) -> Option<Vec2> {
        let x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if x > 0.0 && y > 0.0 {
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    /// Creates an Aabb that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(Aabb::new(min_pt, max_pt))
    }
}
