use tracing::debug;

use super::svg::{self, RenderedPath};
use crate::error::{RenderError, Result};
use crate::frames::SvgPath;

/// External hook called after each render with the resolved paths and the
/// container size.
pub type RenderCallback = Box<dyn FnMut(&[RenderedPath], f64, f64)>;

/// A frame drawn into a resizable container.
///
/// The surrounding framework reports container sizes through
/// [`FrameSurface::resize`]; the surface re-resolves its paths whenever the
/// size changes.
pub struct FrameSurface {
    paths: Vec<SvgPath>,
    on_render: Option<RenderCallback>,
    size: Option<(f64, f64)>,
    rendered: Vec<RenderedPath>,
}

impl FrameSurface {
    /// Creates a surface for `paths` that has not been rendered yet.
    #[must_use]
    pub fn new(paths: Vec<SvgPath>) -> Self {
        Self {
            paths,
            on_render: None,
            size: None,
            rendered: Vec::new(),
        }
    }

    /// Installs an external render callback.
    #[must_use]
    pub fn with_on_render<F>(mut self, on_render: F) -> Self
    where
        F: FnMut(&[RenderedPath], f64, f64) + 'static,
    {
        self.on_render = Some(Box::new(on_render));
        self
    }

    /// Replaces the paths and re-renders at the last known size.
    pub fn set_paths(&mut self, paths: Vec<SvgPath>) {
        self.paths = paths;
        if let Some((width, height)) = self.size {
            self.render(width, height);
        }
    }

    /// Reports the container size. Renders only if the size changed.
    ///
    /// Returns `true` if a render happened.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidDimensions` if either dimension is negative
    /// or not finite.
    #[allow(clippy::float_cmp)]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }
        if self.size == Some((width, height)) {
            return Ok(false);
        }
        self.size = Some((width, height));
        self.render(width, height);
        Ok(true)
    }

    fn render(&mut self, width: f64, height: f64) {
        debug!(width, height, paths = self.paths.len(), "rendering frame surface");
        self.rendered = svg::render_paths(&self.paths, width, height);
        if let Some(on_render) = self.on_render.as_mut() {
            on_render(&self.rendered, width, height);
        }
    }

    /// The paths resolved by the last render.
    #[must_use]
    pub fn rendered(&self) -> &[RenderedPath] {
        &self.rendered
    }

    /// The last reported container size.
    #[must_use]
    pub fn size(&self) -> Option<(f64, f64)> {
        self.size
    }

    /// SVG markup of the last render, or `None` before the first resize.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        self.size
            .map(|(width, height)| svg::markup(&self.rendered, width, height))
    }
}

impl std::fmt::Debug for FrameSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSurface")
            .field("paths", &self.paths)
            .field("on_render", &self.on_render.is_some())
            .field("size", &self.size)
            .field("rendered", &self.rendered)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FacetError;
    use crate::frames::{FrameParams, FrameShape, GenerateSvgPaths};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn paths(inverted: bool) -> Vec<SvgPath> {
        let params = FrameParams::svg().with_inverted(inverted);
        GenerateSvgPaths::new(FrameShape::Pentagon, params).execute()
    }

    #[test]
    fn renders_without_callback() {
        let mut surface = FrameSurface::new(paths(false));
        assert!(surface.markup().is_none());
        assert!(surface.resize(100.0, 100.0).unwrap());
        assert_eq!(surface.rendered().len(), 3);
        assert_eq!(surface.rendered()[2].d, "M 99.5,0.5 L 0.5,0.5 L 0.5,99.5");
        assert!(surface.markup().unwrap().contains("viewBox=\"0 0 100 100\""));
    }

    #[test]
    fn callback_runs_once_per_size_change() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut surface = FrameSurface::new(paths(false))
            .with_on_render(move |rendered, w, h| sink.borrow_mut().push((rendered.len(), w, h)));

        assert!(surface.resize(100.0, 40.0).unwrap());
        assert!(!surface.resize(100.0, 40.0).unwrap());
        assert!(surface.resize(120.0, 40.0).unwrap());

        assert_eq!(*calls.borrow(), vec![(3, 100.0, 40.0), (3, 120.0, 40.0)]);
    }

    #[test]
    fn set_paths_re_renders_at_known_size() {
        let mut surface = FrameSurface::new(paths(false));
        surface.set_paths(paths(true));
        assert!(surface.rendered().is_empty());

        surface.resize(100.0, 100.0).unwrap();
        surface.set_paths(paths(false));
        assert_eq!(surface.rendered()[1].d, "M 0.5,99.5 L 83.5,99.5 L 99.5,83.5 L 99.5,0.5");
    }

    #[test]
    fn empty_surface_still_notifies() {
        let called = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&called);
        let mut surface = FrameSurface::new(Vec::new()).with_on_render(move |rendered, _, _| {
            assert!(rendered.is_empty());
            *flag.borrow_mut() = true;
        });
        surface.resize(10.0, 10.0).unwrap();
        assert!(*called.borrow());
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let mut surface = FrameSurface::new(paths(false));
        for (w, h) in [(-1.0, 10.0), (10.0, f64::NAN), (f64::INFINITY, 10.0)] {
            let err = surface.resize(w, h).unwrap_err();
            assert!(matches!(err, FacetError::Render(RenderError::InvalidDimensions { .. })));
        }
        assert!(surface.size().is_none());
    }
}
