use thiserror::Error;

/// Top-level error type for frame generation and rendering.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to symbolic frame geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid coordinate `{text}`: {reason}")]
    InvalidCoordinate { text: String, reason: &'static str },

    #[error("seam mismatch: path ends at {expected} but continues from {found}")]
    SeamMismatch { expected: String, found: String },
}

/// Errors related to resolving frames against a container.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid container dimensions {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FacetError`].
pub type Result<T> = std::result::Result<T, FacetError>;
