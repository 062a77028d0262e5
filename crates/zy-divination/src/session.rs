//! A divination session: the six-step line progression.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use zy_core::{Hexagram, HexagramTable, Line};

use crate::error::{DivinationError, DivinationResult};
use crate::toss::Toss;

/// Number of lines in a complete hexagram.
pub const HEXAGRAM_LINES: usize = 6;

/// An in-progress divination.
///
/// Lines accumulate bottom-to-top, strictly appending, one per toss.
/// At six lines the session is complete: further tosses are rejected
/// without mutation, and only then may it resolve. The session is owned
/// by its caller and never shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    tosses: Vec<Toss>,
}

impl Session {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tosses cast so far, in casting order.
    pub fn tosses(&self) -> &[Toss] {
        &self.tosses
    }

    /// The lines derived so far, bottom to top.
    pub fn lines(&self) -> Vec<Line> {
        self.tosses.iter().map(Toss::line).collect()
    }

    /// Number of lines cast so far.
    pub fn len(&self) -> usize {
        self.tosses.len()
    }

    /// Returns true before the first toss.
    pub fn is_empty(&self) -> bool {
        self.tosses.is_empty()
    }

    /// Returns true once all six lines are cast.
    pub fn is_complete(&self) -> bool {
        self.tosses.len() == HEXAGRAM_LINES
    }

    /// Cast the next line: three fair coins, summed and mapped.
    ///
    /// Returns the toss (raw faces plus derived line) so the caller can
    /// render it. On a complete session this is a caller error: the
    /// session is left untouched.
    pub fn toss(&mut self, rng: &mut StdRng) -> DivinationResult<Toss> {
        if self.is_complete() {
            return Err(DivinationError::SessionComplete);
        }
        let toss = Toss::cast(rng);
        self.tosses.push(toss);
        Ok(toss)
    }

    /// Append an already-drawn toss.
    ///
    /// This is the deterministic path [`Session::toss`] builds on; it
    /// applies the same completion guard. Returns the derived line.
    pub fn record(&mut self, toss: Toss) -> DivinationResult<Line> {
        if self.is_complete() {
            return Err(DivinationError::SessionComplete);
        }
        self.tosses.push(toss);
        Ok(toss.line())
    }

    /// The full six-line pattern, once complete.
    pub fn pattern(&self) -> Option<[Line; 6]> {
        if !self.is_complete() {
            return None;
        }
        let mut pattern = [Line::Yin; HEXAGRAM_LINES];
        for (slot, toss) in pattern.iter_mut().zip(&self.tosses) {
            *slot = toss.line();
        }
        Some(pattern)
    }

    /// Resolve the completed session against the reference table.
    ///
    /// Before six lines this is a caller error and no lookup happens.
    /// A table miss on a complete session means the table is corrupt
    /// and propagates as [`zy_core::CoreError::NoMatchingHexagram`].
    pub fn resolve<'t>(&self, table: &'t HexagramTable) -> DivinationResult<&'t Hexagram> {
        let pattern = self
            .pattern()
            .ok_or_else(|| DivinationError::SessionIncomplete(self.len()))?;
        Ok(table.by_pattern(pattern)?)
    }

    /// Discard all lines and start over.
    pub fn reset(&mut self) {
        self.tosses.clear();
    }
}
