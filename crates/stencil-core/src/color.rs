//! Color handling for Stencil diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are accepted in any CSS syntax (BPMN color
//! extensions and configuration files both use CSS strings) and are always
//! written out as `#RRGGBB`, the only form Visio cells understand.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::Deserialize;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str.trim()) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    ///
    /// The alpha channel is dropped; transparency is expressed through
    /// separate cells in the output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_core::color::Color;
    ///
    /// assert_eq!(Color::new("red").unwrap().to_hex(), "#FF0000");
    /// assert_eq!(Color::new("#e1f5fe").unwrap().to_hex(), "#E1F5FE");
    /// ```
    pub fn to_hex(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new(" #ff0000 ").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_hex(), "#000000");
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::new("#555555").unwrap().to_hex(), "#555555");
        assert_eq!(Color::new("#999").unwrap().to_hex(), "#999999");
        assert_eq!(Color::new("rgb(51, 51, 51)").unwrap().to_hex(), "#333333");
        assert_eq!(Color::new("white").unwrap().to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_color_display_is_hex() {
        let color = Color::new("blue").unwrap();
        assert_eq!(color.to_string(), "#0000FF");
    }

    #[test]
    fn test_color_try_from_string() {
        let color = Color::try_from("#123456".to_string()).unwrap();
        assert_eq!(color.to_hex(), "#123456");
        assert!(Color::try_from(String::from("nope")).is_err());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
