//! Auspice categories (上上 through 下下).

use serde::{Deserialize, Serialize};

/// The five-rank auspice category attached to each hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Auspice {
    /// 上上 — greatly auspicious.
    Supreme,
    /// 中上 — auspicious.
    Favorable,
    /// 中平 — neither auspicious nor inauspicious.
    Neutral,
    /// 中下 — inauspicious.
    Unfavorable,
    /// 下下 — greatly inauspicious.
    Dire,
}

impl Auspice {
    /// Chinese rank label (上上, 中上, 中平, 中下, 下下).
    pub fn label(self) -> &'static str {
        match self {
            Self::Supreme => "上上",
            Self::Favorable => "中上",
            Self::Neutral => "中平",
            Self::Unfavorable => "中下",
            Self::Dire => "下下",
        }
    }

    /// English gloss of the rank.
    pub fn english(self) -> &'static str {
        match self {
            Self::Supreme => "greatly auspicious",
            Self::Favorable => "auspicious",
            Self::Neutral => "neutral",
            Self::Unfavorable => "inauspicious",
            Self::Dire => "greatly inauspicious",
        }
    }

    /// Parse a rank from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "上上" | "supreme" | "greatly auspicious" | "best" => Some(Self::Supreme),
            "中上" | "favorable" | "favourable" | "auspicious" | "good" => Some(Self::Favorable),
            "中平" | "中中" | "neutral" | "even" => Some(Self::Neutral),
            "中下" | "unfavorable" | "unfavourable" | "inauspicious" | "bad" => {
                Some(Self::Unfavorable)
            }
            "下下" | "dire" | "greatly inauspicious" | "worst" => Some(Self::Dire),
            _ => None,
        }
    }

    /// All ranks in order from most to least auspicious.
    pub fn all() -> &'static [Self] {
        &[
            Self::Supreme,
            Self::Favorable,
            Self::Neutral,
            Self::Unfavorable,
            Self::Dire,
        ]
    }
}

impl std::fmt::Display for Auspice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
