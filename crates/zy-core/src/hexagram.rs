//! The hexagram record type and its derived trigram structure.

use serde::Serialize;

use crate::auspice::Auspice;
use crate::line::Line;
use crate::trigram::Trigram;

/// One of the 64 hexagrams of the King Wen sequence.
///
/// The pattern is ordered bottom-to-top: `pattern[0]` is the lowest line.
/// Records are owned by [`crate::table::HexagramTable`] and read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen number, 1 through 64.
    pub id: u8,
    /// Chinese name.
    pub name: &'static str,
    /// Romanized name.
    pub pinyin: &'static str,
    /// Traditional English gloss.
    pub english: &'static str,
    /// The six lines, bottom to top.
    pub pattern: [Line; 6],
    /// Auspice rank.
    pub auspice: Auspice,
}

impl Hexagram {
    /// The lower trigram (lines 1-3).
    pub fn lower_trigram(&self) -> Trigram {
        Trigram::from_lines([self.pattern[0], self.pattern[1], self.pattern[2]])
    }

    /// The upper trigram (lines 4-6).
    pub fn upper_trigram(&self) -> Trigram {
        Trigram::from_lines([self.pattern[3], self.pattern[4], self.pattern[5]])
    }

    /// The hexagram's composition, upper element over lower element
    /// (e.g. "Earth over Heaven" for hexagram 11).
    pub fn nature(&self) -> String {
        format!(
            "{} over {}",
            self.upper_trigram().element(),
            self.lower_trigram().element()
        )
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.english)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tai() -> Hexagram {
        Hexagram {
            id: 11,
            name: "泰",
            pinyin: "Tai",
            english: "Peace",
            pattern: [
                Line::Yang,
                Line::Yang,
                Line::Yang,
                Line::Yin,
                Line::Yin,
                Line::Yin,
            ],
            auspice: Auspice::Supreme,
        }
    }

    #[test]
    fn trigram_halves() {
        let h = tai();
        assert_eq!(h.lower_trigram(), Trigram::Qian);
        assert_eq!(h.upper_trigram(), Trigram::Kun);
    }

    #[test]
    fn nature_is_upper_over_lower() {
        assert_eq!(tai().nature(), "Earth over Heaven");
    }

    #[test]
    fn display() {
        assert_eq!(tai().to_string(), "#11 泰 (Peace)");
    }
}
