//! CSS `polygon()` builders for clip-path frames.

use crate::geometry::FramePolyline;

/// Formats a polyline as a CSS `polygon()` basic shape.
///
/// ```
/// use facet::frames::{FrameParams, FrameShape, GeneratePolylines};
/// use facet::render::css;
///
/// let frame = GeneratePolylines::new(FrameShape::Pentagon, FrameParams::default()).execute();
/// assert_eq!(
///     css::polygon(&frame.fill()),
///     "polygon(0 100%, calc(100% - 15px) 100%, 100% calc(100% - 15px), 100% 0, 0 0)"
/// );
/// ```
#[must_use]
pub fn polygon(polyline: &FramePolyline) -> String {
    let points: Vec<String> = polyline
        .iter()
        .map(|p| format!("{} {}", p.x.css(), p.y.css()))
        .collect();
    format!("polygon({})", points.join(", "))
}

/// Formats a polyline as a `clip-path` declaration.
#[must_use]
pub fn clip_path(polyline: &FramePolyline) -> String {
    format!("clip-path: {};", polygon(polyline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{FrameParams, FrameShape, GeneratePolylines};

    #[test]
    fn inverted_hexagon_polygon() {
        let params = FrameParams::default().with_inverted(true);
        let frame = GeneratePolylines::new(FrameShape::Hexagon, params).execute();
        assert_eq!(
            polygon(&frame.fill()),
            "polygon(0 0, 0 calc(100% - 15px), 15px 100%, 100% 100%, 100% 15px, calc(100% - 15px) 0)"
        );
    }

    #[test]
    fn zero_square_size_has_no_calc() {
        let params = FrameParams::default().with_square_size(0.0);
        let frame = GeneratePolylines::new(FrameShape::Pentagon, params).execute();
        let css = clip_path(&frame.fill());
        assert!(!css.contains("calc"));
        assert!(css.starts_with("clip-path: polygon(0 100%"));
        assert!(css.ends_with(");"));
    }

    #[test]
    fn empty_polyline() {
        assert_eq!(polygon(&FramePolyline::default()), "polygon()");
    }
}
