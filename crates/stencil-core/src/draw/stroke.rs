//! Line style definitions.
//!
//! Exported types:
//! - [`StrokeDefinition`]: color, weight and pattern of a shape's line
//! - [`LinePattern`]: the dash pattern, mapped to the `LinePattern` cell
//!
//! # Cell Mapping
//!
//! | Rust Property | Visio Cell    | Example Values      |
//! |---------------|---------------|---------------------|
//! | `color`       | `LineColor`   | `"#555555"`         |
//! | `weight`      | `LineWeight`  | `0.02` (inches)     |
//! | `pattern`     | `LinePattern` | `0`, `1`, `2`, `3`  |

use std::str::FromStr;

use crate::color::Color;

/// Dash pattern of a line.
///
/// Each variant maps to a numeric value of the `LinePattern` cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    /// No line at all
    None,
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line, used for message flows
    Dashed,
    /// Dash-dot line, used for associations
    DashDot,
}

impl LinePattern {
    /// Returns the value of the `LinePattern` cell.
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Solid => 1,
            Self::Dashed => 2,
            Self::DashDot => 3,
        }
    }
}

impl FromStr for LinePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dash-dot" | "dashdot" => Ok(Self::DashDot),
            _ => Err(format!("unknown line pattern `{s}`")),
        }
    }
}

/// Complete line definition of a shape.
///
/// # Examples
///
/// ```
/// use stencil_core::color::Color;
/// use stencil_core::draw::{LinePattern, StrokeDefinition};
///
/// let stroke = StrokeDefinition::new(Color::new("#555555").unwrap(), 0.02)
///     .with_pattern(LinePattern::Dashed);
/// assert_eq!(stroke.pattern().code(), 2);
/// assert_eq!(stroke.weight(), 0.02);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    weight: f64,
    pattern: LinePattern,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn new(color: Color, weight: f64) -> Self {
        Self {
            color,
            weight,
            pattern: LinePattern::Solid,
        }
    }

    /// Creates a stroke that draws nothing.
    pub fn hidden() -> Self {
        Self {
            color: Color::default(),
            weight: 0.0,
            pattern: LinePattern::None,
        }
    }

    pub fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Line weight in inches.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn pattern(&self) -> LinePattern {
        self.pattern
    }

    /// Returns true when the stroke is visible.
    pub fn is_visible(&self) -> bool {
        self.pattern != LinePattern::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_pattern_codes() {
        assert_eq!(LinePattern::None.code(), 0);
        assert_eq!(LinePattern::Solid.code(), 1);
        assert_eq!(LinePattern::Dashed.code(), 2);
        assert_eq!(LinePattern::DashDot.code(), 3);
    }

    #[test]
    fn test_line_pattern_from_str() {
        assert_eq!("dashed".parse::<LinePattern>(), Ok(LinePattern::Dashed));
        assert_eq!("dash-dot".parse::<LinePattern>(), Ok(LinePattern::DashDot));
        assert_eq!("dashdot".parse::<LinePattern>(), Ok(LinePattern::DashDot));
        assert!("wavy".parse::<LinePattern>().is_err());
    }

    #[test]
    fn test_hidden_stroke() {
        let stroke = StrokeDefinition::hidden();
        assert!(!stroke.is_visible());
        assert_eq!(stroke.pattern().code(), 0);
    }

    #[test]
    fn test_default_pattern_is_solid() {
        let stroke = StrokeDefinition::new(Color::default(), 0.04);
        assert!(stroke.is_visible());
        assert_eq!(stroke.pattern(), LinePattern::Solid);
    }
}
