use crate::color::Color;

/// Fill of a shape body.
///
/// A transparent fill keeps its color but sets the foreground transparency,
/// which is how annotations and label shapes stay see-through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillDefinition {
    color: Color,
    transparent: bool,
    patterned: bool,
}

impl FillDefinition {
    /// An opaque solid fill.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            transparent: false,
            patterned: true,
        }
    }

    /// A fully transparent solid fill.
    pub fn transparent(color: Color) -> Self {
        Self {
            color,
            transparent: true,
            patterned: true,
        }
    }

    /// No fill pattern at all.
    pub fn none(color: Color) -> Self {
        Self {
            color,
            transparent: true,
            patterned: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Returns the value of the `FillPattern` cell.
    pub fn pattern_code(&self) -> u8 {
        u8::from(self.patterned)
    }
}
