use super::{FramePoint, FramePolyline};

/// A single SVG path drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(FramePoint),
    LineTo(FramePoint),
}

impl PathCommand {
    /// Returns the target vertex of the command.
    #[must_use]
    pub fn point(&self) -> FramePoint {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
        }
    }

    /// Returns the SVG command letter.
    #[must_use]
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePath {
    pub commands: Vec<PathCommand>,
}

impl FramePath {
    /// Converts a polyline into a `MoveTo` followed by one `LineTo` per remaining vertex.
    #[must_use]
    pub fn from_polyline(polyline: &FramePolyline) -> Self {
        let commands = polyline
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    PathCommand::MoveTo(p)
                } else {
                    PathCommand::LineTo(p)
                }
            })
            .collect();
        Self { commands }
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the vertices visited by the path, in order.
    #[must_use]
    pub fn points(&self) -> FramePolyline {
        self.commands.iter().map(PathCommand::point).collect()
    }

    /// Returns the number of sub-paths (one per `MoveTo`).
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }
}
