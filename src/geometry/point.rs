use std::fmt;

use super::Coordinate;
use crate::math::Point2;

/// A frame vertex with symbolic coordinates on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePoint {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl FramePoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    /// Resolves the point against a container of `width` x `height` pixels.
    #[must_use]
    pub fn resolve(&self, width: f64, height: f64) -> Point2 {
        Point2::new(self.x.resolve(width), self.y.resolve(height))
    }

    /// Moves both coordinates `amount` pixels toward the container interior.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(self.x.inset(amount), self.y.inset(amount))
    }

    /// Maps `(x, y)` to `(100% - y, x)`.
    ///
    /// On a square container this is a quarter turn about the center; it carries
    /// the non-inverted corner topology onto the inverted one.
    #[must_use]
    pub fn quarter_turn(&self) -> Self {
        Self::new(self.y.complement(), self.x)
    }
}

impl fmt::Display for FramePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
