/// Default square-cut size for polyline (CSS) frames.
pub const DEFAULT_SQUARE_SIZE: f64 = 15.0;

/// Default square-cut size for SVG frames.
pub const DEFAULT_SVG_SQUARE_SIZE: f64 = 16.0;

/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Parameters shared by every frame generator.
///
/// Negative sizes are not rejected; the resulting geometry is the caller's
/// responsibility. A square size larger than the container yields
/// self-intersecting outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Length of the square-cut corner.
    pub square_size: f64,
    /// Moves the bevel to the mirrored corner topology.
    pub inverted: bool,
    /// Stroke width, used by the SVG generator for the inset.
    pub stroke_width: f64,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            inverted: false,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl FrameParams {
    /// Parameters with the SVG frame defaults.
    #[must_use]
    pub fn svg() -> Self {
        Self {
            square_size: DEFAULT_SVG_SQUARE_SIZE,
            ..Self::default()
        }
    }

    /// Sets the square-cut size.
    #[must_use]
    pub fn with_square_size(mut self, square_size: f64) -> Self {
        self.square_size = square_size;
        self
    }

    /// Sets the inversion flag.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Half the stroke width: the distance strokes are inset from the container edge.
    #[must_use]
    pub fn stroke_offset(&self) -> f64 {
        self.stroke_width * 0.5
    }

    /// Returns the parameters with signed zeros folded to `0.0`.
    ///
    /// Values are otherwise passed through unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            square_size: self.square_size + 0.0,
            inverted: self.inverted,
            stroke_width: self.stroke_width + 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = FrameParams::default();
        assert!((p.square_size - 15.0).abs() < f64::EPSILON);
        assert!(!p.inverted);
        assert!((p.stroke_width - 1.0).abs() < f64::EPSILON);
        assert!((FrameParams::svg().square_size - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn setters_chain() {
        let p = FrameParams::default()
            .with_square_size(8.0)
            .with_inverted(true)
            .with_stroke_width(3.0);
        assert!((p.square_size - 8.0).abs() < f64::EPSILON);
        assert!(p.inverted);
        assert!((p.stroke_offset() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_folds_negative_zero_only() {
        let p = FrameParams::default()
            .with_square_size(-0.0)
            .with_stroke_width(-2.0)
            .normalized();
        assert!(p.square_size.is_sign_positive());
        assert!((p.stroke_width + 2.0).abs() < f64::EPSILON);
    }
}
