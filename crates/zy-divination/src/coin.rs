//! Coin faces and their numeric weights.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One face of a divination coin.
///
/// The yin face counts 2, the yang face counts 3; three faces sum to
/// the toss total of 6-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Yin face, weight 2.
    Yin,
    /// Yang face, weight 3.
    Yang,
}

impl CoinFace {
    /// Numeric weight of the face: 2 for yin, 3 for yang.
    pub fn value(self) -> u8 {
        match self {
            Self::Yin => 2,
            Self::Yang => 3,
        }
    }

    /// Build a face from its numeric weight. Anything but 2 or 3 is `None`.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Self::Yin),
            3 => Some(Self::Yang),
            _ => None,
        }
    }

    /// Flip a fair coin using the given RNG.
    pub fn flip(rng: &mut StdRng) -> Self {
        if rng.random_range(0..=1) == 1 {
            Self::Yang
        } else {
            Self::Yin
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "阴"),
            Self::Yang => write!(f, "阳"),
        }
    }
}
