pub mod animation;
pub mod error;
pub mod frames;
pub mod geometry;
pub mod math;
pub mod render;
pub mod tessellation;
pub mod theme;

pub use error::{FacetError, Result};
