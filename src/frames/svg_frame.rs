use tracing::trace;

use super::{FrameParams, FrameShape, GeneratePolylines, PathName, PathStyle};
use crate::geometry::FramePath;

/// A named, styled SVG sub-path.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPath {
    pub name: PathName,
    pub style: PathStyle,
    pub path: FramePath,
}

/// Generates the SVG path-command description of a frame.
///
/// Produces three records: the filled `shape`, then the boundary and the corner
/// as two separate `decoration` strokes. Each decoration starts with its own
/// `MoveTo`, so the corner joins are drawn as two round caps meeting at a shared
/// coordinate.
///
/// Every vertex is inset by half the stroke width so the outer edge of the
/// stroke, not its centerline, lies on the container boundary.
pub struct GenerateSvgPaths {
    shape: FrameShape,
    params: FrameParams,
}

impl GenerateSvgPaths {
    /// Creates a new `GenerateSvgPaths` operation.
    #[must_use]
    pub fn new(shape: FrameShape, params: FrameParams) -> Self {
        Self { shape, params }
    }

    /// Executes the generation.
    #[must_use]
    pub fn execute(&self) -> Vec<SvgPath> {
        let params = self.params.normalized();
        let so = params.stroke_offset();
        let frame = GeneratePolylines::new(self.shape, params).execute().inset(so);
        let decoration = PathStyle::decoration(params.stroke_width);

        trace!(shape = %self.shape, stroke_offset = so, "generated frame svg paths");
        vec![
            SvgPath {
                name: PathName::Shape,
                style: PathStyle::shape(),
                path: FramePath::from_polyline(&frame.fill()),
            },
            SvgPath {
                name: PathName::Decoration,
                style: decoration,
                path: FramePath::from_polyline(frame.boundary()),
            },
            SvgPath {
                name: PathName::Decoration,
                style: decoration,
                path: FramePath::from_polyline(frame.corner_stroke()),
            },
        ]
    }
}
