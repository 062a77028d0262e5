//! One three-coin toss and its derived line.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use zy_core::Line;

use crate::coin::CoinFace;

/// The result of casting three coins for one line.
///
/// The sum of the three face weights ranges 6-9 and maps to a line:
///
/// | sum | reading    | line |
/// |-----|------------|------|
/// | 6   | old yin    | yin  |
/// | 7   | young yang | yang |
/// | 8   | young yin  | yin  |
/// | 9   | old yang   | yang |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toss {
    /// The three coin faces, in the order they were drawn.
    pub coins: [CoinFace; 3],
}

impl Toss {
    /// Cast three independent fair coins using the given RNG.
    pub fn cast(rng: &mut StdRng) -> Self {
        Self {
            coins: [
                CoinFace::flip(rng),
                CoinFace::flip(rng),
                CoinFace::flip(rng),
            ],
        }
    }

    /// Sum of the three face weights (6-9).
    pub fn sum(&self) -> u8 {
        self.coins.iter().map(|c| c.value()).sum()
    }

    /// The line this toss derives.
    pub fn line(&self) -> Line {
        match self.sum() {
            7 | 9 => Line::Yang,
            _ => Line::Yin,
        }
    }
}

impl std::fmt::Display for Toss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.coins.iter().map(|c| c.value().to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn toss(values: [u8; 3]) -> Toss {
        Toss {
            coins: values.map(|v| CoinFace::from_value(v).unwrap()),
        }
    }

    #[test]
    fn sums_cover_six_through_nine() {
        assert_eq!(toss([2, 2, 2]).sum(), 6);
        assert_eq!(toss([2, 2, 3]).sum(), 7);
        assert_eq!(toss([2, 3, 3]).sum(), 8);
        assert_eq!(toss([3, 3, 3]).sum(), 9);
    }

    #[test]
    fn line_mapping_all_combinations() {
        // Every ordering of faces; only the sum matters.
        let cases = [
            ([2, 2, 2], Line::Yin),  // 6, old yin
            ([2, 2, 3], Line::Yang), // 7, young yang
            ([2, 3, 2], Line::Yang),
            ([3, 2, 2], Line::Yang),
            ([2, 3, 3], Line::Yin), // 8, young yin
            ([3, 2, 3], Line::Yin),
            ([3, 3, 2], Line::Yin),
            ([3, 3, 3], Line::Yang), // 9, old yang
        ];
        for (values, expected) in cases {
            assert_eq!(toss(values).line(), expected, "coins {values:?}");
        }
    }

    #[test]
    fn cast_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Toss::cast(&mut rng1), Toss::cast(&mut rng2));
        }
    }

    #[test]
    fn cast_sum_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            let t = Toss::cast(&mut rng);
            assert!((6..=9).contains(&t.sum()));
        }
    }

    #[test]
    fn display() {
        assert_eq!(toss([3, 2, 3]).to_string(), "[3, 2, 3] = 8");
    }
}
