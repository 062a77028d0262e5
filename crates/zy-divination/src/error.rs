//! Error types for the engine.

use thiserror::Error;

/// Alias for `Result<T, DivinationError>`.
pub type DivinationResult<T> = Result<T, DivinationError>;

/// Errors raised by the divination engine.
///
/// The first two variants are caller contract violations and never occur
/// in a correctly driven flow; the table variant propagates reference
/// corruption and is fatal for the resolution that hit it.
#[derive(Debug, Error)]
pub enum DivinationError {
    /// A toss was attempted on a session that already has six lines.
    #[error("session already has six lines")]
    SessionComplete,

    /// Resolution was attempted before all six lines were cast.
    #[error("session has {0} of six lines")]
    SessionIncomplete(usize),

    /// The reference table failed to match a complete session.
    #[error(transparent)]
    Table(#[from] zy_core::CoreError),
}
