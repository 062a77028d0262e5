//! Yin and yang line values.

use serde::{Deserialize, Serialize};

/// A single line of a trigram or hexagram.
///
/// Line sequences are always ordered bottom-to-top: index 0 is the first
/// line cast and the lowest line of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Broken line, numeric value 0.
    Yin,
    /// Solid line, numeric value 1.
    Yang,
}

impl Line {
    /// Numeric value of the line: 0 for yin, 1 for yang.
    pub fn value(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Build a line from its numeric value. Anything but 0 or 1 is `None`.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Yin),
            1 => Some(Self::Yang),
            _ => None,
        }
    }

    /// Returns true for a solid (yang) line.
    pub fn is_yang(self) -> bool {
        self == Self::Yang
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// Numeric values of a line sequence, in the same bottom-to-top order.
pub fn values<const N: usize>(lines: [Line; N]) -> [u8; N] {
    lines.map(Line::value)
}
