//! Geometric primitives for diagram compilation.
//!
//! This module provides the geometric types shared by the parser, the
//! compiler and the exporter.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`round4`] - The 4-decimal rounding applied to every emitted number
//!
//! # Coordinate Systems
//!
//! Two coordinate systems meet in this crate. Source geometry read from a
//! BPMN document is expressed in pixels with the origin at the top-left:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Page geometry is expressed in inches with the origin at the bottom-left
//! and Y increasing upward:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! The types below are agnostic; which system a value lives in is decided by
//! the code that produced it.

/// Rounds a value to 4 decimal places.
///
/// The exact binary value is rounded, not the product of a scaling multiply,
/// so values just below a half step round down.
///
/// Negative zero is normalized to `0.0` so that serialized output never
/// contains `-0`.
///
/// # Examples
///
/// ```
/// # use stencil_core::geometry::round4;
/// assert_eq!(round4(0.123456), 0.1235);
/// assert_eq!(round4(-0.00001), 0.0);
/// assert!(round4(-0.00001).is_sign_positive());
/// ```
pub fn round4(value: f64) -> f64 {
    let rounded = format!("{value:.4}").parse::<f64>().unwrap_or(value);
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use stencil_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean length of the point seen as a vector
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        other.sub_point(self).hypot()
    }

    /// Rounds both coordinates with [`round4`]
    pub fn round4(self) -> Self {
        Self {
            x: round4(self.x),
            y: round4(self.y),
        }
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified width and height
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the smaller of the two dimensions
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Checks if both dimensions are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns a size whose dimensions are at least those of `floor`
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_core::geometry::Size;
    /// let size = Size::new(0.3, 1.0).at_least(Size::new(0.8, 0.25));
    /// assert_eq!(size, Size::new(0.8, 1.0));
    /// ```
    pub fn at_least(self, floor: Size) -> Self {
        Self {
            width: self.width.max(floor.width),
            height: self.height.max(floor.height),
        }
    }

    /// Returns the center of a box of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Rounds both dimensions with [`round4`]
    pub fn round4(self) -> Self {
        Self {
            width: round4(self.width),
            height: round4(self.height),
        }
    }
}

/// A rectangular bounding box.
///
/// Bounds are stored as minimum and maximum coordinates, which makes them
/// independent of the Y direction of the coordinate system they live in.
///
/// # Examples
///
/// ```
/// # use stencil_core::geometry::{Bounds, Point, Size};
/// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
/// let b = Bounds::new_from_top_left(Point::new(5.0, 20.0), Size::new(10.0, 5.0));
///
/// let merged = a.merge(&b);
/// assert_eq!(merged.min_x(), 0.0);
/// assert_eq!(merged.max_x(), 15.0);
/// assert_eq!(merged.max_y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from a minimum corner and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    /// Creates bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half = size.center();
        Self::new_from_top_left(center.sub_point(half), size)
    }

    /// Creates degenerate bounds containing a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x(),
            min_y: point.y(),
            max_x: point.x(),
            max_y: point.y(),
        }
    }

    /// Creates the smallest bounds containing every point, or `None` when empty
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |acc, p| acc.merge_point(*p)),
        )
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the minimum corner
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the smallest bounds containing both `self` and `other`
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the smallest bounds containing both `self` and `point`
    pub fn merge_point(&self, point: Point) -> Self {
        self.merge(&Self::from_point(point))
    }

    /// Checks whether a point lies inside or on the edge of the bounds
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }
}
