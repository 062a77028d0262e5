//! Request record and prompt derivation.

use zy_core::{Hexagram, Line, Trigram};

/// The immutable record handed to the interpretation service.
///
/// Captures the resolved hexagram's identity and its full six-line
/// pattern in bottom-to-top order; the prompt is derived from these
/// fields alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationRequest {
    /// King Wen number.
    pub id: u8,
    /// Chinese name.
    pub name: String,
    /// Romanized name.
    pub pinyin: String,
    /// English gloss.
    pub english: String,
    /// The six lines, bottom to top.
    pub pattern: [Line; 6],
}

impl InterpretationRequest {
    /// Build the request record from a resolved hexagram.
    pub fn new(hexagram: &Hexagram) -> Self {
        Self {
            id: hexagram.id,
            name: hexagram.name.to_string(),
            pinyin: hexagram.pinyin.to_string(),
            english: hexagram.english.to_string(),
            pattern: hexagram.pattern,
        }
    }

    fn lower_trigram(&self) -> Trigram {
        Trigram::from_lines([self.pattern[0], self.pattern[1], self.pattern[2]])
    }

    fn upper_trigram(&self) -> Trigram {
        Trigram::from_lines([self.pattern[3], self.pattern[4], self.pattern[5]])
    }

    /// Per-line structure, bottom to top, the way diviners read it:
    /// yang lines are "Nine", yin lines are "Six".
    fn line_structure(&self) -> String {
        self.pattern
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let reading = if line.is_yang() {
                    "Yang (Nine)"
                } else {
                    "Yin (Six)"
                };
                format!("Line {}: {}", index + 1, reading)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The full prompt sent to the interpretation service.
    pub fn prompt(&self) -> String {
        let lower = self.lower_trigram();
        let upper = self.upper_trigram();

        format!(
            "You are a wise and profound I Ching master.\n\
             Provide a detailed bilingual (Chinese and English) interpretation \
             for the following hexagram.\n\
             \n\
             Name: {name} ({english})\n\
             Pinyin: {pinyin}\n\
             Number: {id}\n\
             Composition: Upper {upper_name} ({upper_element}) over Lower {lower_name} ({lower_element}).\n\
             Structure (Bottom to Top):\n\
             {lines}\n\
             \n\
             Structure your response using Markdown headers.\n\
             Crucial: for each section, write the content in Chinese first, \
             followed immediately by the English translation.\n\
             \n\
             Required sections:\n\
             1. **The Essence / 核心卦义**: a brief poetic summary of the hexagram's meaning.\n\
             2. **The Judgment / 卦辞解析**: explanation of the core judgment.\n\
             3. **The Image / 大象传**: symbolism of the trigrams.\n\
             4. **The Lines / 爻辞详解**: all six lines from Bottom (Line 1) to Top (Line 6), \
             each with its position name, traditional meaning, and a modern annotation.\n\
             5. **Modern Guidance / 现代启示**: practical advice for career, relationships, \
             or decision making.\n\
             \n\
             Keep the tone serene, philosophical, yet clear and helpful. \
             Use bolding for key terms.",
            name = self.name,
            english = self.english,
            pinyin = self.pinyin,
            id = self.id,
            upper_name = upper.name(),
            upper_element = upper.element(),
            lower_name = lower.name(),
            lower_element = lower.element(),
            lines = self.line_structure(),
        )
    }
}
