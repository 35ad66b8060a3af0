use std::ops::Index;

use super::{FramePoint, PathBuilder};
use crate::error::Result;
use crate::math::Point2;

/// An ordered, open run of frame vertices.
///
/// Order defines the drawing direction. The last vertex does not connect back
/// to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePolyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<FramePoint>,
}

impl FramePolyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<FramePoint>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first(&self) -> Option<&FramePoint> {
        self.points.first()
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last(&self) -> Option<&FramePoint> {
        self.points.last()
    }

    /// Iterates over the vertices in drawing order.
    pub fn iter(&self) -> std::slice::Iter<'_, FramePoint> {
        self.points.iter()
    }

    /// Appends `other` after `self` without any seam handling.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut points = Vec::with_capacity(self.len() + other.len());
        points.extend_from_slice(&self.points);
        points.extend_from_slice(&other.points);
        Self { points }
    }

    /// Continues `self` with `next`, which must start where `self` ends.
    ///
    /// The shared vertex appears once in the result.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SeamMismatch` if `next` does not start at the
    /// last vertex of `self`.
    pub fn join(&self, next: &Self) -> Result<Self> {
        let mut builder = PathBuilder::from_polyline(self);
        let mut rest = next.iter();
        if let Some(&seam) = rest.next() {
            builder.continue_from(seam)?;
        }
        builder.extend(rest.copied());
        Ok(builder.build())
    }

    /// Moves every vertex `amount` pixels toward the container interior.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        self.points.iter().map(|p| p.inset(amount)).collect()
    }

    /// Resolves every vertex against a container of `width` x `height` pixels.
    #[must_use]
    pub fn resolve(&self, width: f64, height: f64) -> Vec<Point2> {
        self.points.iter().map(|p| p.resolve(width, height)).collect()
    }
}

impl FromIterator<FramePoint> for FramePolyline {
    fn from_iter<I: IntoIterator<Item = FramePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for FramePolyline {
    type Output = FramePoint;

    fn index(&self, index: usize) -> &FramePoint {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a FramePolyline {
    type Item = &'a FramePoint;
    type IntoIter = std::slice::Iter<'a, FramePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
