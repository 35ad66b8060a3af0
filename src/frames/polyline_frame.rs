use tracing::trace;

use super::{FrameParams, FrameShape};
use crate::geometry::{Coordinate, FramePoint, FramePolyline, PathBuilder};

/// Polyline description of a frame in container-relative coordinates.
///
/// The outline is split into two runs that never repeat a vertex between them:
/// the long `boundary` run (three sides and the opposite bevel) and the short
/// `corner` run (the beveled corner).
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineFrame {
    boundary: FramePolyline,
    corner: FramePolyline,
    corner_stroke: FramePolyline,
}

impl PolylineFrame {
    fn from_runs(boundary: [FramePoint; 4], corner: Vec<FramePoint>) -> Self {
        let boundary = FramePolyline::new(boundary.to_vec());
        let corner = FramePolyline::new(corner);
        let corner_stroke = bracket(&boundary, &corner);
        Self {
            boundary,
            corner,
            corner_stroke,
        }
    }

    /// The long run: three sides and the bevel opposite the cut corner.
    #[must_use]
    pub fn boundary(&self) -> &FramePolyline {
        &self.boundary
    }

    /// The short run describing the cut corner.
    #[must_use]
    pub fn corner(&self) -> &FramePolyline {
        &self.corner
    }

    /// The corner run bracketed by the last and first boundary vertices.
    #[must_use]
    pub fn corner_stroke(&self) -> &FramePolyline {
        &self.corner_stroke
    }

    /// The closed fill region: `boundary ++ corner`.
    #[must_use]
    pub fn fill(&self) -> FramePolyline {
        self.boundary.concat(&self.corner)
    }

    /// The two visible outline strokes, in drawing order.
    #[must_use]
    pub fn decorations(&self) -> [FramePolyline; 2] {
        [self.boundary.clone(), self.corner_stroke.clone()]
    }

    /// Moves every vertex `amount` pixels toward the container interior.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            boundary: self.boundary.inset(amount),
            corner: self.corner.inset(amount),
            corner_stroke: self.corner_stroke.inset(amount),
        }
    }
}

/// Draws `corner` as a stroke that leaves the boundary at its last vertex and
/// re-enters it at its first.
fn bracket(boundary: &FramePolyline, corner: &FramePolyline) -> FramePolyline {
    let mut stroke = PathBuilder::new();
    if let Some(&exit) = boundary.last() {
        let entered = stroke.continue_from(exit).is_ok();
        debug_assert!(entered, "an empty builder accepts any seam");
    }
    stroke.extend(corner.iter().copied());
    if let Some(&entry) = boundary.first() {
        stroke.line_to(entry);
    }
    let stroke = stroke.build();
    debug_assert!(
        boundary.join(&stroke).is_ok() && stroke.join(boundary).is_ok(),
        "corner stroke must share both seams with the boundary"
    );
    stroke
}

/// Generates the polyline (CSS clip-path) description of a frame.
pub struct GeneratePolylines {
    shape: FrameShape,
    params: FrameParams,
}

impl GeneratePolylines {
    /// Creates a new `GeneratePolylines` operation.
    #[must_use]
    pub fn new(shape: FrameShape, params: FrameParams) -> Self {
        Self { shape, params }
    }

    /// Executes the generation. Stroke width is ignored: clip paths do not
    /// inflate with strokes.
    #[must_use]
    pub fn execute(&self) -> PolylineFrame {
        let params = self.params.normalized();
        let ss = params.square_size;
        let zero = Coordinate::ZERO;
        let full = Coordinate::FULL;
        let near = Coordinate::px(ss);
        let far = Coordinate::from_end(ss);
        let p = FramePoint::new;

        let (boundary, corner) = if params.inverted {
            let boundary = [p(zero, zero), p(zero, far), p(near, full), p(full, full)];
            let corner = match self.shape {
                FrameShape::Hexagon => vec![p(full, near), p(far, zero)],
                FrameShape::Pentagon => vec![p(full, zero)],
            };
            (boundary, corner)
        } else {
            let boundary = [p(zero, full), p(far, full), p(full, far), p(full, zero)];
            let corner = match self.shape {
                FrameShape::Hexagon => vec![p(near, zero), p(zero, near)],
                FrameShape::Pentagon => vec![p(zero, zero)],
            };
            (boundary, corner)
        };

        trace!(
            shape = %self.shape,
            square_size = ss,
            inverted = params.inverted,
            "generated frame polylines"
        );
        PolylineFrame::from_runs(boundary, corner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FacetError, GeometryError};
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn generate(shape: FrameShape, square_size: f64, inverted: bool) -> PolylineFrame {
        let params = FrameParams::default()
            .with_square_size(square_size)
            .with_inverted(inverted);
        GeneratePolylines::new(shape, params).execute()
    }

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn pt(x: &str, y: &str) -> FramePoint {
        FramePoint::new(c(x), c(y))
    }

    fn assert_points(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert_relative_eq!(a.x, x);
            assert_relative_eq!(a.y, y);
        }
    }

    #[test]
    fn pentagon_resolved_at_100() {
        let frame = generate(FrameShape::Pentagon, 16.0, false);
        assert_points(
            &frame.boundary().resolve(100.0, 100.0),
            &[(0.0, 100.0), (84.0, 100.0), (100.0, 84.0), (100.0, 0.0)],
        );
        assert_points(&frame.corner().resolve(100.0, 100.0), &[(0.0, 0.0)]);
        assert_points(
            &frame.fill().resolve(100.0, 100.0),
            &[(0.0, 100.0), (84.0, 100.0), (100.0, 84.0), (100.0, 0.0), (0.0, 0.0)],
        );
        assert_points(
            &frame.decorations()[1].resolve(100.0, 100.0),
            &[(100.0, 0.0), (0.0, 0.0), (0.0, 100.0)],
        );
    }

    #[test]
    fn hexagon_inverted_symbolic() {
        let frame = generate(FrameShape::Hexagon, 15.0, true);
        assert_eq!(
            frame.boundary().points,
            vec![
                pt("0", "0"),
                pt("0", "100% - 15"),
                pt("15", "100%"),
                pt("100%", "100%"),
            ]
        );
        assert_eq!(
            frame.corner().points,
            vec![pt("100%", "15"), pt("100% - 15", "0")]
        );
        let fill = frame.fill();
        assert_eq!(fill.len(), 6);
        for (i, a) in fill.iter().enumerate() {
            for b in fill.iter().skip(i + 1) {
                assert_ne!(a, b, "duplicate vertex {a}");
            }
        }
    }

    #[test]
    fn hexagon_non_inverted_symbolic() {
        let frame = generate(FrameShape::Hexagon, 15.0, false);
        assert_eq!(
            frame.boundary().points,
            vec![
                pt("0", "100%"),
                pt("100% - 15", "100%"),
                pt("100%", "100% - 15"),
                pt("100%", "0"),
            ]
        );
        assert_eq!(frame.corner().points, vec![pt("15", "0"), pt("0", "15")]);
    }

    #[test]
    fn pentagon_inverted_corner_is_top_right() {
        let frame = generate(FrameShape::Pentagon, 15.0, true);
        assert_eq!(frame.corner().points, vec![pt("100%", "0")]);
    }

    #[test]
    fn zero_square_size_is_plain_rectangle() {
        for shape in [FrameShape::Hexagon, FrameShape::Pentagon] {
            let plain = generate(shape, 0.0, false);
            assert_eq!(
                plain.boundary().points,
                vec![
                    pt("0", "100%"),
                    pt("100%", "100%"),
                    pt("100%", "100%"),
                    pt("100%", "0"),
                ]
            );
            assert!(plain.corner().iter().all(|p| *p == pt("0", "0")));

            let inverted = generate(shape, 0.0, true);
            assert_eq!(inverted.boundary()[1], pt("0", "100%"));
            assert_eq!(inverted.boundary()[2], pt("0", "100%"));
        }
    }

    #[test]
    fn decorations_join_back_into_a_loop() {
        for shape in [FrameShape::Hexagon, FrameShape::Pentagon] {
            for inverted in [false, true] {
                let frame = generate(shape, 12.0, inverted);
                let [first, second] = frame.decorations();
                let outline = first.join(&second).unwrap();
                assert_eq!(outline.first(), outline.last());
                assert_eq!(outline.len(), frame.fill().len() + 1);
            }
        }
    }

    #[test]
    fn corner_stroke_seams_hold_through_inset() {
        for shape in [FrameShape::Hexagon, FrameShape::Pentagon] {
            for inverted in [false, true] {
                let frame = generate(shape, 16.0, inverted).inset(0.5);
                let [boundary, stroke] = frame.decorations();
                let there = boundary.join(&stroke).unwrap();
                let back = stroke.join(&boundary).unwrap();
                assert_eq!(there.len(), boundary.len() + stroke.len() - 1);
                assert_eq!(back.len(), there.len());
            }
        }
    }

    #[test]
    fn mismatched_corner_stroke_is_rejected_at_the_seam() {
        let frame = generate(FrameShape::Pentagon, 16.0, false);
        let shifted = frame.corner_stroke().inset(0.5);
        let result = frame.boundary().join(&shifted);
        assert!(matches!(
            result,
            Err(FacetError::Geometry(GeometryError::SeamMismatch { .. }))
        ));
    }

    #[test]
    fn inset_moves_every_vertex() {
        let frame = generate(FrameShape::Pentagon, 16.0, false).inset(0.5);
        assert_points(
            &frame.corner_stroke().resolve(100.0, 100.0),
            &[(99.5, 0.5), (0.5, 0.5), (0.5, 99.5)],
        );
    }

    fn shapes() -> impl Strategy<Value = FrameShape> {
        prop_oneof![Just(FrameShape::Hexagon), Just(FrameShape::Pentagon)]
    }

    proptest! {
        #[test]
        fn fill_is_boundary_then_corner(shape in shapes(), ss in 0.0f64..500.0, inverted: bool) {
            let frame = generate(shape, ss, inverted);
            let fill = frame.fill();
            prop_assert_eq!(fill.len(), frame.boundary().len() + frame.corner().len());
            prop_assert_eq!(&fill.points[..4], &frame.boundary().points[..]);
            prop_assert_eq!(&fill.points[4..], &frame.corner().points[..]);
            prop_assert_eq!(frame.corner().len(), shape.corner_count());
        }

        #[test]
        fn corner_stroke_is_bracketed_by_boundary(shape in shapes(), ss in 0.0f64..500.0, inverted: bool) {
            let frame = generate(shape, ss, inverted);
            let [boundary, stroke] = frame.decorations();
            prop_assert_eq!(stroke.first(), boundary.last());
            prop_assert_eq!(stroke.last(), boundary.first());
            prop_assert_eq!(&stroke.points[1..stroke.len() - 1], &frame.corner().points[..]);
        }

        #[test]
        fn inverted_is_quarter_turn_of_non_inverted(shape in shapes(), ss in 0.0f64..500.0) {
            let plain = generate(shape, ss, false);
            let inverted = generate(shape, ss, true);
            let turned: FramePolyline = plain.fill().iter().map(FramePoint::quarter_turn).collect();
            prop_assert_eq!(turned, inverted.fill());
        }
    }
}
