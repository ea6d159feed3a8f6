//! The fixed seven-color palette.
//!
//! Colors carry identity only: there is no ordering between them beyond
//! their position in [`PALETTE`], which is used for uniform sampling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct colors in the palette.
pub const PALETTE_SIZE: usize = 7;

/// A peg color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
}

/// Every color, in palette order.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Purple,
    Color::Orange,
    Color::Cyan,
];

impl Color {
    /// Position of this color in [`PALETTE`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at a palette index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }

    /// Lowercase name, as used in save records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no palette color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown color `{0}`")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_indices_match_order() {
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(PALETTE_SIZE), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" Cyan ".parse::<Color>(), Ok(Color::Cyan));
        assert_eq!(Color::Orange.to_string(), "orange");
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(UnknownColor("magenta".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Color::Purple).unwrap();
        assert_eq!(json, "\"purple\"");

        let back: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, Color::Green);
        assert!(serde_json::from_str::<Color>("\"Green\"").is_err());
    }
}
