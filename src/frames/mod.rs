mod frame;
mod params;
mod polyline_frame;
mod style;
mod svg_frame;

pub use frame::Frame;
pub use params::{FrameParams, DEFAULT_SQUARE_SIZE, DEFAULT_STROKE_WIDTH, DEFAULT_SVG_SQUARE_SIZE};
pub use polyline_frame::{GeneratePolylines, PolylineFrame};
pub use style::{LineCap, LineJoin, Paint, PathName, PathStyle};
pub use svg_frame::{GenerateSvgPaths, SvgPath};

use std::fmt;

/// Frame outline variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameShape {
    /// Two opposite corners cut.
    Hexagon,
    /// One corner cut.
    Pentagon,
}

impl FrameShape {
    /// Number of vertices in the corner run.
    #[must_use]
    pub fn corner_count(self) -> usize {
        match self {
            Self::Hexagon => 2,
            Self::Pentagon => 1,
        }
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hexagon => f.write_str("hexagon"),
            Self::Pentagon => f.write_str("pentagon"),
        }
    }
}
