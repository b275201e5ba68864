//! Geometry paths.
//!
//! A [`Path`] corresponds to one `Geometry` section of a Visio shape: an
//! ordered list of drawing commands plus the section's fill and line flags.

use crate::geometry::Point;

/// A single row of a geometry section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new sub-path at the given point.
    MoveTo(Point),
    /// Straight segment to the given point.
    LineTo(Point),
    /// Circular arc to `end`.
    ///
    /// `bow` is the signed distance from the chord midpoint to the arc;
    /// positive values bulge to the left of the chord direction.
    ArcTo { end: Point, bow: f64 },
    /// Ellipse given by its center, a point on the major axis and a point
    /// on the minor axis.
    Ellipse {
        center: Point,
        major: Point,
        minor: Point,
    },
}

impl PathCommand {
    /// Returns the row type name used by the target format.
    pub fn row_type(&self) -> &'static str {
        match self {
            Self::MoveTo(_) => "MoveTo",
            Self::LineTo(_) => "LineTo",
            Self::ArcTo { .. } => "ArcTo",
            Self::Ellipse { .. } => "Ellipse",
        }
    }
}

/// An ordered list of [`PathCommand`]s with fill and line visibility.
///
/// # Examples
///
/// ```
/// # use stencil_core::draw::Path;
/// # use stencil_core::geometry::Point;
/// let path = Path::stroked()
///     .move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(1.0, 0.0));
///
/// assert!(!path.is_filled());
/// assert!(path.is_stroked());
/// assert_eq!(path.commands().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    filled: bool,
    stroked: bool,
}

impl Path {
    /// A path that is filled and outlined, used for shape bodies and arrowheads.
    pub fn filled() -> Self {
        Self::new(true, true)
    }

    /// A path that is outlined but never filled.
    pub fn stroked() -> Self {
        Self::new(false, true)
    }

    /// A path that is neither filled nor outlined.
    ///
    /// Used for the hit area of text-only label shapes.
    pub fn invisible() -> Self {
        Self::new(false, false)
    }

    /// Builds a stroked open polyline through `points`.
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::stroked();
        path.extend_polyline(points);
        path
    }

    /// Builds a stroked polyline through `points` that returns to the first point.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::polyline(points);
        if let Some(first) = points.first() {
            path.commands.push(PathCommand::LineTo(*first));
        }
        path
    }

    /// Builds a stroked axis-aligned rectangle between two corners,
    /// starting and ending at `min`.
    pub fn rectangle(min: Point, max: Point) -> Self {
        Self::polygon(&[
            min,
            Point::new(max.x(), min.y()),
            max,
            Point::new(min.x(), max.y()),
        ])
    }

    /// Appends a `MoveTo` followed by `LineTo`s through the remaining points.
    pub fn extend_polyline(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.commands.push(PathCommand::MoveTo(*first));
        self.commands
            .extend(rest.iter().map(|p| PathCommand::LineTo(*p)));
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc_to(mut self, end: Point, bow: f64) -> Self {
        self.commands.push(PathCommand::ArcTo { end, bow });
        self
    }

    pub fn ellipse(mut self, center: Point, major: Point, minor: Point) -> Self {
        self.commands.push(PathCommand::Ellipse {
            center,
            major,
            minor,
        });
        self
    }

    /// Appends a raw command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Returns a copy of the path with its fill flag replaced.
    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn is_stroked(&self) -> bool {
        self.stroked
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns true if any command is an [`PathCommand::ArcTo`].
    pub fn has_arc(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, PathCommand::ArcTo { .. }))
    }

    fn new(filled: bool, stroked: bool) -> Self {
        Self {
            commands: Vec::new(),
            filled,
            stroked,
        }
    }
}
