use std::collections::{HashMap, HashSet};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};
use tracing::debug;

use super::TriangleMesh2;
use crate::error::{Result, TessellationError};
use crate::geometry::FramePolyline;
use crate::math::polygon_2d::{dedup_closed, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a frame's fill region for renderers that draw triangles.
///
/// The fill polyline is resolved against the container, coincident vertices
/// from degenerate bevels are merged, and the resulting closed loop is
/// triangulated with a constrained Delaunay triangulation. Only triangles
/// inside the loop are kept.
#[derive(Debug)]
pub struct TessellateFill {
    points: Vec<Point2>,
}

impl TessellateFill {
    /// Creates a new fill tessellation for a `width` x `height` container.
    #[must_use]
    pub fn new(fill: &FramePolyline, width: f64, height: f64) -> Self {
        Self {
            points: fill.resolve(width, height),
        }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 distinct vertices remain, if they are
    /// collinear, if a vertex is not finite, or if the outline crosses itself
    /// (e.g. a square size larger than the container).
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh2> {
        let distinct = dedup_closed(&self.points);
        if distinct.len() >= 3 && signed_area_2d(&distinct).abs() < TOLERANCE {
            return Err(
                TessellationError::InvalidParameters("fill region has zero area".to_owned()).into(),
            );
        }
        let loop_2d: Vec<SpadePoint2<f64>> = distinct
            .iter()
            .map(|p| SpadePoint2::new(p.x, p.y))
            .collect();

        let mut cdt = Cdt::new();
        insert_constraint_loop(&mut cdt, &loop_2d)?;
        let exterior = exterior_faces(&cdt);

        let mut mesh = TriangleMesh2::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            let fix = face_handle.fix();
            if exterior.contains(&fix.index()) {
                continue;
            }

            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                let mesh_idx = *vertex_map.entry(idx).or_insert_with(|| {
                    let pos = vh.position();
                    mesh.vertices.push(Point2::new(pos.x, pos.y));
                    (mesh.vertices.len() - 1) as u32
                });
                tri_indices[i] = mesh_idx;
            }
            mesh.indices.push(tri_indices);
        }

        debug!(
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len(),
            "tessellated frame fill"
        );
        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(cdt: &mut Cdt, points: &[SpadePoint2<f64>]) -> Result<()> {
    if points.len() < 3 {
        return Err(TessellationError::InvalidParameters(format!(
            "fill region needs at least 3 distinct points, got {}",
            points.len()
        ))
        .into());
    }

    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(
                TessellationError::Failed("fill region intersects itself".to_owned()).into(),
            );
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Collects the inner faces that lie outside the fill loop.
///
/// The loop is simple, so a face is exterior exactly when it can be reached
/// from the outer face without crossing a constraint edge.
fn exterior_faces(cdt: &Cdt) -> HashSet<usize> {
    let outer_fix = cdt.outer_face().fix();
    let mut stack: Vec<FixedFaceHandle<InnerTag>> = cdt
        .directed_edges()
        .filter(|edge| {
            edge.face().fix() == outer_fix
                && !cdt.is_constraint_edge(edge.as_undirected().fix())
        })
        .filter_map(|edge| edge.rev().face().as_inner().map(|face| face.fix()))
        .collect();

    let mut exterior = HashSet::new();
    while let Some(face_fix) = stack.pop() {
        if !exterior.insert(face_fix.index()) {
            continue;
        }
        for edge in cdt.face(face_fix).adjacent_edges() {
            if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                continue;
            }
            if let Some(neighbor) = edge.rev().face().as_inner() {
                stack.push(neighbor.fix());
            }
        }
    }
    exterior
}
