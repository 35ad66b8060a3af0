//! Resolves SVG path records against a container and writes markup.

use std::fmt::Write;

use crate::frames::{PathName, PathStyle, SvgPath};
use crate::geometry::FramePath;

/// An SVG path record resolved to a concrete `d` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPath {
    pub name: PathName,
    pub style: PathStyle,
    pub d: String,
}

/// Formats a path as SVG `d` data for a `width` x `height` container.
#[must_use]
pub fn path_data(path: &FramePath, width: f64, height: f64) -> String {
    let mut d = String::new();
    for (i, command) in path.commands.iter().enumerate() {
        let p = command.point().resolve(width, height);
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{} {},{}", command.letter(), fmt_number(p.x), fmt_number(p.y));
    }
    d
}

/// Resolves every path record for a `width` x `height` container.
#[must_use]
pub fn render_paths(paths: &[SvgPath], width: f64, height: f64) -> Vec<RenderedPath> {
    paths
        .iter()
        .map(|p| RenderedPath {
            name: p.name,
            style: p.style,
            d: path_data(&p.path, width, height),
        })
        .collect()
}

/// Writes a standalone `<svg>` element stretched over its positioned parent.
#[must_use]
pub fn markup(paths: &[RenderedPath], width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="none" viewBox="0 0 {} {}" style="position: absolute; left: 0; right: 0; top: 0; bottom: 0; display: block; border: 0; margin: 0; padding: 0; width: 100%; height: 100%;">"#,
        fmt_number(width),
        fmt_number(height)
    );
    for path in paths {
        let _ = write!(out, r#"<path data-name="{}""#, path.name);
        for (attr, value) in path.style.attributes() {
            let _ = write!(out, r#" {attr}="{value}""#);
        }
        let _ = write!(out, r#" d="{}"/>"#, path.d);
    }
    out.push_str("</svg>");
    out
}

/// Formats a pixel value with at most three decimals and no trailing zeros.
fn fmt_number(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{FrameParams, FrameShape, GenerateSvgPaths};

    fn pentagon() -> Vec<SvgPath> {
        GenerateSvgPaths::new(FrameShape::Pentagon, FrameParams::svg()).execute()
    }

    #[test]
    fn pentagon_path_data() {
        let rendered = render_paths(&pentagon(), 100.0, 100.0);
        assert_eq!(rendered.len(), 3);
        assert_eq!(
            rendered[0].d,
            "M 0.5,99.5 L 83.5,99.5 L 99.5,83.5 L 99.5,0.5 L 0.5,0.5"
        );
        assert_eq!(rendered[1].d, "M 0.5,99.5 L 83.5,99.5 L 99.5,83.5 L 99.5,0.5");
        assert_eq!(rendered[2].d, "M 99.5,0.5 L 0.5,0.5 L 0.5,99.5");
    }

    #[test]
    fn path_data_tracks_container_size() {
        let rendered = render_paths(&pentagon(), 300.0, 50.0);
        assert_eq!(rendered[2].d, "M 299.5,0.5 L 0.5,0.5 L 0.5,49.5");
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_number(0.1 + 0.2), "0.3");
        assert_eq!(fmt_number(84.0), "84");
        assert_eq!(fmt_number(-0.0), "0");
    }

    #[test]
    fn markup_contains_each_path() {
        let rendered = render_paths(&pentagon(), 100.0, 100.0);
        let svg = markup(&rendered, 100.0, 100.0);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert_eq!(svg.matches("<path ").count(), 3);
        assert!(svg.contains(
            r#"<path data-name="shape" stroke-width="0" fill="currentcolor" d="M 0.5,99.5"#
        ));
        assert_eq!(svg.matches(r#"data-name="decoration""#).count(), 2);
        assert!(svg.ends_with("</svg>"));
    }
}
