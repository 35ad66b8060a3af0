pub mod cache;
pub mod css;
pub mod surface;
pub mod svg;

pub use cache::{FrameCache, FrameKey};
pub use surface::{FrameSurface, RenderCallback};
pub use svg::RenderedPath;
