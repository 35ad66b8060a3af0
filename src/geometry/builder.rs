use super::{FramePath, FramePoint, FramePolyline};
use crate::error::{GeometryError, Result};

/// Incrementally assembles a polyline while checking the seams between runs.
///
/// Two runs that are meant to look continuous must meet at the same
/// [`Coordinate`](super::Coordinate) values, not merely at the same resolved
/// pixel. [`PathBuilder::continue_from`] enforces that.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<FramePoint>,
}

impl PathBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose first vertex is `start`.
    #[must_use]
    pub fn starting_at(start: FramePoint) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Creates a builder seeded with the vertices of `polyline`.
    #[must_use]
    pub fn from_polyline(polyline: &FramePolyline) -> Self {
        Self {
            points: polyline.points.clone(),
        }
    }

    /// Returns the current end of the path.
    #[must_use]
    pub fn current(&self) -> Option<&FramePoint> {
        self.points.last()
    }

    /// Continues the path from `seam`, which must equal the current end.
    ///
    /// On an empty builder the path starts at `seam`. The seam vertex is never
    /// duplicated.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SeamMismatch` if the path already ends somewhere else.
    pub fn continue_from(&mut self, seam: FramePoint) -> Result<&mut Self> {
        match self.points.last() {
            None => self.points.push(seam),
            Some(end) if *end == seam => {}
            Some(end) => {
                return Err(GeometryError::SeamMismatch {
                    expected: end.to_string(),
                    found: seam.to_string(),
                }
                .into());
            }
        }
        Ok(self)
    }

    /// Appends a vertex.
    pub fn line_to(&mut self, point: FramePoint) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Appends vertices in order.
    pub fn extend<I: IntoIterator<Item = FramePoint>>(&mut self, points: I) -> &mut Self {
        self.points.extend(points);
        self
    }

    /// Finishes the run as a polyline.
    #[must_use]
    pub fn build(self) -> FramePolyline {
        FramePolyline::new(self.points)
    }

    /// Finishes the run as an explicit move-then-lines command sequence.
    #[must_use]
    pub fn build_path(self) -> FramePath {
        FramePath::from_polyline(&self.build())
    }
}
