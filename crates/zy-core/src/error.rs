//! Error types used throughout the crate.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the reference table.
///
/// Construction-time variants indicate a corrupt embedded table and are
/// unreachable with the shipped data; `NoMatchingHexagram` is the lookup
/// form of the same corruption and must always be surfaced, never
/// substituted with a default.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record's King Wen number is outside 1-64.
    #[error("invalid hexagram id: {0}")]
    InvalidId(u8),

    /// Two records share the same King Wen number.
    #[error("duplicate hexagram id: {0}")]
    DuplicateId(u8),

    /// A record's pattern contains a value other than 0 or 1.
    #[error("invalid line pattern on hexagram {id}")]
    InvalidPattern {
        /// King Wen number of the offending record.
        id: u8,
    },

    /// Two records share the same six-line pattern.
    #[error("hexagrams {first} and {second} share one pattern")]
    DuplicatePattern {
        /// King Wen number of the first record.
        first: u8,
        /// King Wen number of the conflicting record.
        second: u8,
    },

    /// The table does not hold exactly 64 records.
    #[error("reference table holds {0} records, expected 64")]
    IncompleteTable(usize),

    /// No record matches the given six-line pattern.
    #[error("no hexagram matches pattern {pattern:?}")]
    NoMatchingHexagram {
        /// The unmatched pattern's numeric values, bottom to top.
        pattern: [u8; 6],
    },
}
