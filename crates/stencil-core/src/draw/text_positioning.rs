/// Where a shape's descriptive text is rendered.
///
/// Visio clips a shape's text to its geometry. Shapes whose outline does not
/// cover their bounding box (ellipses, diamonds) therefore cannot host text
/// placed outside the outline and must delegate it to a separate label shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStrategy {
    /// Text is rendered inside the shape's own text block.
    Embedded,
    /// Text is rendered by a separate, transparent label shape.
    Detached,
}

impl TextStrategy {
    /// Returns true if the host shape itself carries the given text.
    pub fn host_carries_text(&self, text: &str) -> bool {
        match self {
            Self::Embedded => !text.is_empty(),
            Self::Detached => false,
        }
    }

    /// Returns true if a separate label shape is needed for the given text.
    pub fn needs_label_shape(&self, text: &str) -> bool {
        match self {
            Self::Embedded => false,
            Self::Detached => !text.is_empty(),
        }
    }
}
