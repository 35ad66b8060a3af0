use std::fmt;

/// Role of an SVG sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathName {
    /// Solid fill painting the frame background.
    Shape,
    /// Stroked outline segment.
    Decoration,
}

impl PathName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Decoration => "decoration",
        }
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint source for fills and strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    None,
    CurrentColor,
}

impl Paint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CurrentColor => "currentcolor",
        }
    }
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Stroke corner join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Presentation style of an SVG sub-path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub stroke: Option<Paint>,
    pub stroke_width: f64,
    pub stroke_linecap: Option<LineCap>,
    pub stroke_linejoin: Option<LineJoin>,
    pub fill: Paint,
}

impl PathStyle {
    /// Style of the background fill: no stroke, filled with the current color.
    #[must_use]
    pub fn shape() -> Self {
        Self {
            stroke: None,
            stroke_width: 0.0,
            stroke_linecap: None,
            stroke_linejoin: None,
            fill: Paint::CurrentColor,
        }
    }

    /// Style of an outline stroke of the given width.
    #[must_use]
    pub fn decoration(stroke_width: f64) -> Self {
        Self {
            stroke: Some(Paint::CurrentColor),
            stroke_width,
            stroke_linecap: Some(LineCap::Round),
            stroke_linejoin: Some(LineJoin::Round),
            fill: Paint::None,
        }
    }

    /// Returns the style as SVG presentation attributes, in a stable order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(5);
        if let Some(stroke) = self.stroke {
            attrs.push(("stroke", stroke.as_str().to_owned()));
        }
        if let Some(cap) = self.stroke_linecap {
            attrs.push(("stroke-linecap", cap.as_str().to_owned()));
        }
        if let Some(join) = self.stroke_linejoin {
            attrs.push(("stroke-linejoin", join.as_str().to_owned()));
        }
        attrs.push(("stroke-width", self.stroke_width.to_string()));
        attrs.push(("fill", self.fill.as_str().to_owned()));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_style_attributes() {
        let attrs = PathStyle::shape().attributes();
        assert_eq!(attrs, vec![
            ("stroke-width", "0".to_owned()),
            ("fill", "currentcolor".to_owned()),
        ]);
    }

    #[test]
    fn decoration_style_attributes() {
        let attrs = PathStyle::decoration(2.0).attributes();
        assert_eq!(attrs, vec![
            ("stroke", "currentcolor".to_owned()),
            ("stroke-linecap", "round".to_owned()),
            ("stroke-linejoin", "round".to_owned()),
            ("stroke-width", "2".to_owned()),
            ("fill", "none".to_owned()),
        ]);
    }

    #[test]
    fn names_render_lowercase() {
        assert_eq!(PathName::Shape.to_string(), "shape");
        assert_eq!(PathName::Decoration.to_string(), "decoration");
    }
}
