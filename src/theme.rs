//! Theme lookups consumed by frames.

/// Spacing and outline scale of a UI theme.
pub trait Theme {
    /// Spacing in pixels for a multiple of the theme's spacing unit.
    fn space(&self, multiplier: f64) -> f64;

    /// Outline (stroke) width in pixels for a multiple of the theme's outline unit.
    fn outline(&self, multiplier: f64) -> f64;
}

/// Linear theme scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultTheme {
    pub space_unit: f64,
    pub outline_unit: f64,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self {
            space_unit: 5.0,
            outline_unit: 1.0,
        }
    }
}

impl Theme for DefaultTheme {
    fn space(&self, multiplier: f64) -> f64 {
        self.space_unit * multiplier
    }

    fn outline(&self, multiplier: f64) -> f64 {
        self.outline_unit * multiplier
    }
}

/// Inner padding of a framed panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePadding {
    pub vertical: f64,
    pub horizontal: f64,
}

impl FramePadding {
    /// Frame padding: two spacing units vertically, four horizontally.
    #[must_use]
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self {
            vertical: theme.space(2.0),
            horizontal: theme.space(4.0),
        }
    }

    /// Formats the padding as a CSS declaration.
    #[must_use]
    pub fn css(&self) -> String {
        format!("padding: {}px {}px;", self.vertical, self.horizontal)
    }
}
