pub mod builder;
pub mod coordinate;
pub mod path;
pub mod point;
pub mod polyline;

pub use builder::PathBuilder;
pub use coordinate::Coordinate;
pub use path::{FramePath, PathCommand};
pub use point::FramePoint;
pub use polyline::FramePolyline;
