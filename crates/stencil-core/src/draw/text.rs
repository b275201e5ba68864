//! Text formatting and text block placement.

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Points per inch, used to express font sizes in page units.
const POINTS_PER_INCH: f64 = 72.0;

/// Horizontal paragraph alignment, mapped to the `HorzAlign` cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlign {
    /// Returns the value of the `HorzAlign` cell.
    pub fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }
}

/// Character and paragraph formatting of a shape's text.
///
/// # Examples
///
/// ```
/// use stencil_core::color::Color;
/// use stencil_core::draw::TextDefinition;
///
/// let text = TextDefinition::new(9.0, Color::new("#333333").unwrap());
/// assert_eq!(text.font_size_in(), 0.125);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_size: f64,
    color: Color,
    align: HorizontalAlign,
}

impl TextDefinition {
    /// Creates a centered text definition with a font size in points.
    pub fn new(font_size: f64, color: Color) -> Self {
        Self {
            font_size,
            color,
            align: HorizontalAlign::Center,
        }
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Font size in inches, the unit of the `Size` character cell.
    pub fn font_size_in(&self) -> f64 {
        self.font_size / POINTS_PER_INCH
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }
}

/// Placement of the text region relative to its shape.
///
/// `pin` is expressed in the shape-local coordinate system and `size` is the
/// unrotated extent of the text region. The region is always anchored at its
/// own center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    angle: f64,
    pin: Point,
    size: Size,
}

impl TextBlock {
    /// An unrotated text block.
    pub fn new(pin: Point, size: Size) -> Self {
        Self {
            angle: 0.0,
            pin,
            size,
        }
    }

    /// A text block covering a whole shape of the given size.
    pub fn fill(shape_size: Size) -> Self {
        Self::new(shape_size.center(), shape_size)
    }

    /// Sets the rotation angle in radians.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Rotation in radians, counter-clockwise.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn pin(&self) -> Point {
        self.pin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The anchor inside the text block, always its center.
    pub fn loc_pin(&self) -> Point {
        self.size.center()
    }
}
