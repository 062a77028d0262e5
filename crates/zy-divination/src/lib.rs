//! Three-coin divination engine.
//!
//! Simulates the traditional casting: six sequential tosses of three
//! coins, one line per toss, built bottom-to-top into a six-line figure
//! that resolves against the reference table. All randomness comes from
//! an injected `StdRng`, so the derivation logic itself is fully
//! deterministic and seedable.

/// Coin faces and their numeric weights.
pub mod coin;
/// Error types for the engine.
pub mod error;
/// A divination session: the six-step line progression.
pub mod session;
/// One three-coin toss and its derived line.
pub mod toss;

pub use coin::CoinFace;
pub use error::{DivinationError, DivinationResult};
pub use session::{HEXAGRAM_LINES, Session};
pub use toss::Toss;
