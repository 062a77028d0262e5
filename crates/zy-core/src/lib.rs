//! Core reference data for Zhouyi: lines, trigrams, and the 64 hexagrams.
//!
//! This crate owns the read-only King Wen reference table. The table is
//! built once at startup, validated for completeness, and then only ever
//! read — resolution of a cast pattern, lookups by id or name, and the
//! search filter all go through [`HexagramTable`].

/// Auspice categories (上上 through 下下).
pub mod auspice;
/// Error types used throughout the crate.
pub mod error;
/// The hexagram record type and its derived trigram structure.
pub mod hexagram;
/// Yin and yang line values.
pub mod line;
/// Query builder for filtering and searching the table.
pub mod query;
/// The immutable 64-entry reference table.
pub mod table;
/// The eight trigrams and their elemental associations.
pub mod trigram;

pub use auspice::Auspice;
pub use error::{CoreError, CoreResult};
pub use hexagram::Hexagram;
pub use line::Line;
pub use table::HexagramTable;
pub use trigram::Trigram;
