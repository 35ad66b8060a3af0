use super::{FrameParams, FrameShape, GeneratePolylines, GenerateSvgPaths, PolylineFrame, SvgPath};
use crate::animation::CueMap;
use crate::render::css;
use crate::theme::{FramePadding, Theme};

/// A themed frame around a UI panel.
///
/// `line_width` is a multiple of the theme's outline unit; the resolved stroke
/// width ends up in [`Frame::params`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    shape: FrameShape,
    params: FrameParams,
    padding: FramePadding,
    cues: CueMap,
}

impl Frame {
    /// Creates a frame, resolving its stroke width and padding through `theme`.
    #[must_use]
    pub fn new(shape: FrameShape, params: FrameParams, line_width: f64, theme: &dyn Theme) -> Self {
        Self {
            shape,
            params: params.with_stroke_width(theme.outline(line_width)).normalized(),
            padding: FramePadding::from_theme(theme),
            cues: CueMap::frame_default(),
        }
    }

    /// Replaces the audio cues.
    #[must_use]
    pub fn with_cues(mut self, cues: CueMap) -> Self {
        self.cues = cues;
        self
    }

    #[must_use]
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    #[must_use]
    pub fn params(&self) -> &FrameParams {
        &self.params
    }

    #[must_use]
    pub fn padding(&self) -> &FramePadding {
        &self.padding
    }

    #[must_use]
    pub fn cues(&self) -> &CueMap {
        &self.cues
    }

    /// Polyline description for clip paths and polygon outlines.
    #[must_use]
    pub fn polylines(&self) -> PolylineFrame {
        GeneratePolylines::new(self.shape, self.params).execute()
    }

    /// SVG path records, inset by half the resolved stroke width.
    #[must_use]
    pub fn svg_paths(&self) -> Vec<SvgPath> {
        GenerateSvgPaths::new(self.shape, self.params).execute()
    }

    /// `clip-path` declaration clipping content to the frame's fill region.
    #[must_use]
    pub fn clip_path(&self) -> String {
        css::clip_path(&self.polylines().fill())
    }
}
