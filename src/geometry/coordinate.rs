use std::fmt;
use std::str::FromStr;

use crate::error::{FacetError, GeometryError};

/// One axis of a frame vertex, kept symbolic until the container size is known.
///
/// Every variant is a linear expression `percent% + px` of the container extent:
/// - `Absolute(px)`: `0% + px`
/// - `Percent(p)`: `p% + 0`
/// - `PercentMinus(p, px)`: `p% - px` (a negative `px` reads as `p% + |px|`)
///
/// Equality compares the linear expression, so `PercentMinus(100.0, 0.0)`
/// equals `Percent(100.0)` and `Percent(0.0)` equals `Absolute(0.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Coordinate {
    Absolute(f64),
    Percent(f64),
    PercentMinus(f64, f64),
}

impl Coordinate {
    /// The near container edge (`0`).
    pub const ZERO: Self = Self::Absolute(0.0);

    /// The far container edge (`100%`).
    pub const FULL: Self = Self::Percent(100.0);

    /// An offset of `px` from the near edge.
    #[must_use]
    pub fn px(px: f64) -> Self {
        Self::from_linear(0.0, px)
    }

    /// An offset of `px` back from the far edge (`100% - px`).
    #[must_use]
    pub fn from_end(px: f64) -> Self {
        Self::from_linear(100.0, -px)
    }

    /// Builds the canonical variant for `percent% + px`.
    #[must_use]
    pub fn from_linear(percent: f64, px: f64) -> Self {
        // Adding +0.0 folds -0.0 into 0.0 so rendered text never shows "-0".
        let percent = percent + 0.0;
        let px = px + 0.0;
        if percent == 0.0 {
            Self::Absolute(px)
        } else if px == 0.0 {
            Self::Percent(percent)
        } else {
            Self::PercentMinus(percent, -px)
        }
    }

    /// Returns `(percent, px)` such that the coordinate is `percent% + px`.
    #[must_use]
    pub fn linear(self) -> (f64, f64) {
        match self {
            Self::Absolute(px) => (0.0, px),
            Self::Percent(p) => (p, 0.0),
            Self::PercentMinus(p, px) => (p, -px),
        }
    }

    /// Resolves the coordinate against a container extent in pixels.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        let (percent, px) = self.linear();
        percent / 100.0 * extent + px
    }

    /// Shifts the coordinate by `delta` pixels.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        let (percent, px) = self.linear();
        Self::from_linear(percent, px + delta)
    }

    /// Returns `true` if the coordinate is anchored to the far edge (`100%`).
    #[must_use]
    pub fn is_far(self) -> bool {
        self.linear().0 >= 50.0
    }

    /// Moves the coordinate `amount` pixels toward the container interior.
    ///
    /// Near-edge coordinates grow, far-edge coordinates shrink.
    #[must_use]
    pub fn inset(self, amount: f64) -> Self {
        if self.is_far() {
            self.offset(-amount)
        } else {
            self.offset(amount)
        }
    }

    /// Mirrors the coordinate across the container center: `100% - self`.
    #[must_use]
    pub fn complement(self) -> Self {
        let (percent, px) = self.linear();
        Self::from_linear(100.0 - percent, -px)
    }

    /// Formats the coordinate as a CSS length (`0`, `15px`, `100%`, `calc(100% - 15px)`).
    #[must_use]
    pub fn css(self) -> String {
        let (percent, px) = self.linear();
        match Self::from_linear(percent, px) {
            Self::Absolute(px) if px == 0.0 => "0".to_owned(),
            Self::Absolute(px) => format!("{px}px"),
            Self::Percent(p) => format!("{p}%"),
            Self::PercentMinus(p, px) if px < 0.0 => format!("calc({p}% + {}px)", -px),
            Self::PercentMinus(p, px) => format!("calc({p}% - {px}px)"),
        }
    }
}

impl PartialEq for Coordinate {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.linear() == other.linear()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (percent, px) = self.linear();
        match Self::from_linear(percent, px) {
            Self::Absolute(px) => write!(f, "{px}"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::PercentMinus(p, px) if px < 0.0 => write!(f, "{p}% + {}", -px),
            Self::PercentMinus(p, px) => write!(f, "{p}% - {px}"),
        }
    }
}

impl FromStr for Coordinate {
    type Err = FacetError;

    /// Parses the authored notation: `15`, `15px`, `100%`, `100% - 15`, `100% + 2.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| GeometryError::InvalidCoordinate {
            text: s.to_owned(),
            reason,
        };
        let text = s.trim();
        if text.is_empty() {
            return Err(invalid("empty").into());
        }

        let Some((percent_text, rest)) = text.split_once('%') else {
            let px = parse_px(text).ok_or_else(|| invalid("expected a number"))?;
            return Ok(Self::px(px));
        };

        let percent = parse_number(percent_text).ok_or_else(|| invalid("expected a percentage"))?;
        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(Self::from_linear(percent, 0.0));
        }

        let (sign, operand) = if let Some(operand) = rest.strip_prefix('-') {
            (-1.0, operand)
        } else if let Some(operand) = rest.strip_prefix('+') {
            (1.0, operand)
        } else {
            return Err(invalid("expected `+` or `-` after the percentage").into());
        };
        let operand = operand.trim_start();
        if operand.starts_with(['+', '-']) {
            return Err(invalid("the pixel offset after `+` or `-` must be unsigned").into());
        }
        let px = parse_px(operand).ok_or_else(|| invalid("expected a pixel offset"))?;
        Ok(Self::from_linear(percent, sign * px))
    }
}

fn parse_px(text: &str) -> Option<f64> {
    let text = text.trim();
    parse_number(text.strip_suffix("px").unwrap_or(text))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
