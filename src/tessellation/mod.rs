mod tessellate_fill;

pub use tessellate_fill::TessellateFill;

use crate::math::Point2;

/// A triangle mesh in resolved pixel space.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh2 {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh2 {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Total unsigned area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let [a, b, c] = (*tri).map(|i| self.vertices[i as usize]);
                ((b - a).perp(&(c - a)) * 0.5).abs()
            })
            .sum()
    }
}
