//! The eight trigrams and their elemental associations.

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// One of the eight trigrams, the three-line halves of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ Heaven.
    Qian,
    /// ☱ Lake.
    Dui,
    /// ☲ Fire.
    Li,
    /// ☳ Thunder.
    Zhen,
    /// ☴ Wind.
    Xun,
    /// ☵ Water.
    Kan,
    /// ☶ Mountain.
    Gen,
    /// ☷ Earth.
    Kun,
}

impl Trigram {
    /// The trigram with the given three lines, bottom to top.
    ///
    /// Total: every combination of three lines names exactly one trigram.
    pub fn from_lines(lines: [Line; 3]) -> Self {
        match crate::line::values(lines) {
            [1, 1, 1] => Self::Qian,
            [1, 1, 0] => Self::Dui,
            [1, 0, 1] => Self::Li,
            [1, 0, 0] => Self::Zhen,
            [0, 1, 1] => Self::Xun,
            [0, 1, 0] => Self::Kan,
            [0, 0, 1] => Self::Gen,
            _ => Self::Kun,
        }
    }

    /// The trigram's three lines, bottom to top.
    pub fn lines(self) -> [Line; 3] {
        match self {
            Self::Qian => [Line::Yang, Line::Yang, Line::Yang],
            Self::Dui => [Line::Yang, Line::Yang, Line::Yin],
            Self::Li => [Line::Yang, Line::Yin, Line::Yang],
            Self::Zhen => [Line::Yang, Line::Yin, Line::Yin],
            Self::Xun => [Line::Yin, Line::Yang, Line::Yang],
            Self::Kan => [Line::Yin, Line::Yang, Line::Yin],
            Self::Gen => [Line::Yin, Line::Yin, Line::Yang],
            Self::Kun => [Line::Yin, Line::Yin, Line::Yin],
        }
    }

    /// Chinese name of the trigram.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Romanized name.
    pub fn pinyin(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// Natural element associated with the trigram.
    pub fn element(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }

    /// Traditional English gloss.
    pub fn english(self) -> &'static str {
        match self {
            Self::Qian => "The Creative",
            Self::Dui => "The Joyous",
            Self::Li => "The Clinging",
            Self::Zhen => "The Arousing",
            Self::Xun => "The Gentle",
            Self::Kan => "The Abysmal",
            Self::Gen => "Keeping Still",
            Self::Kun => "The Receptive",
        }
    }

    /// All eight trigrams.
    pub fn all() -> &'static [Self; 8] {
        &[
            Self::Qian,
            Self::Dui,
            Self::Li,
            Self::Zhen,
            Self::Xun,
            Self::Kan,
            Self::Gen,
            Self::Kun,
        ]
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_round_trips() {
        for trigram in Trigram::all() {
            assert_eq!(Trigram::from_lines(trigram.lines()), *trigram);
        }
    }

    #[test]
    fn all_patterns_distinct() {
        let mut seen = std::collections::HashSet::new();
        for trigram in Trigram::all() {
            assert!(seen.insert(trigram.lines()));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn qian_is_three_yang() {
        assert_eq!(
            Trigram::from_lines([Line::Yang, Line::Yang, Line::Yang]),
            Trigram::Qian
        );
        assert_eq!(Trigram::Qian.element(), "Heaven");
    }

    #[test]
    fn zhen_bottom_yang() {
        // Thunder: one yang line below two yin lines.
        assert_eq!(
            Trigram::from_lines([Line::Yang, Line::Yin, Line::Yin]),
            Trigram::Zhen
        );
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Kan.to_string(), "坎 (Water)");
    }
}
