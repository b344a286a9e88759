use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Bias added to the edge height in the ray-cast test so horizontal edges
/// never divide by zero.
const EDGE_EPSILON: f64 = 1e-4;

/// Polygon given by its vertices in the owning body's local frame.
/// Vertices may wind either way; containment uses the even-odd rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonDef")]
pub struct Polygon {
    vertices: Vec<Vec2>,
    #[serde(skip_serializing)]
    centroid: Vec2,
}

#[derive(Deserialize)]
struct PolygonDef {
    vertices: Vec<Vec2>,
}

impl TryFrom<PolygonDef> for Polygon {
    type Error = ShapeError;

    fn try_from(def: PolygonDef) -> Result<Self, Self::Error> {
        Polygon::try_new(def.vertices)
    }
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self::try_new(vertices).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        if let Some(i) = vertices.iter().position(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(ShapeError::NonFiniteVertex(i));
        }
        let sum = vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
        let centroid = sum / vertices.len() as f64;
        Ok(Polygon { vertices, centroid })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Arithmetic mean of the vertices, fixed at construction.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Even-odd ray cast against the local-frame vertex loop.
    pub fn contains_local(&self, p: Vec2) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y + EDGE_EPSILON) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        (self.signed_double_area() / 2.0).abs()
    }

    fn signed_double_area(&self) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.vertices[i].cross(self.vertices[(i + 1) % n]))
            .sum()
    }

    /// Area-weighted center, which differs from [`Polygon::centroid`] for irregular outlines.
    fn mass_center(&self) -> Vec2 {
        let n = self.vertices.len();
        let double_area = self.signed_double_area();
        if double_area.abs() < 1e-10 {
            return self.centroid;
        }
        let mut acc = Vec2::ZERO;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            acc += (v1 + v2) * v1.cross(v2);
        }
        acc / (3.0 * double_area)
    }

    /// Moment of inertia of a uniform lamina of the given mass about its mass center.
    pub fn inertia(&self, mass: f64) -> f64 {
        let area = self.area();
        if area < 1e-10 {
            return 0.0;
        }
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            sum += v1.cross(v2) * (v1.magnitude_squared() + v1.dot(v2) + v2.magnitude_squared());
        }
        let density = mass / area;
        let about_origin = (sum / 12.0).abs() * density;
        (about_origin - mass * self.mass_center().magnitude_squared()).max(0.0)
    }
}
