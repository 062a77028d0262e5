//! Streaming AI interpretation client.
//!
//! The interpretation service is an opaque external collaborator: given
//! a resolved hexagram it produces a finite, non-restartable stream of
//! text fragments. This crate builds the request record, drives the
//! Gemini `streamGenerateContent` SSE call, and normalizes everything
//! to [`InterpretationEvent`]s pushed over a `tokio::sync::mpsc`
//! channel.
//!
//! Operational failures (missing credential, HTTP errors, mid-stream
//! faults) are degraded into events rather than returned as errors, so
//! partial output is never lost and the caller never has to unwind: a
//! failed stream ends in a single terminal notice. Retrying is always
//! caller-initiated ("regenerate"); [`Transcript`] makes sure fragments
//! of a superseded stream never reach the visible text.

/// Client configuration (credential, model, endpoint).
pub mod config;
/// The Gemini streaming client.
pub mod gemini;
/// Request record and prompt derivation.
pub mod request;
/// SSE framing helpers.
mod sse;
/// Fragment accumulation with staleness handling.
pub mod transcript;

pub use config::OracleConfig;
pub use gemini::{MISSING_KEY_NOTICE, stream_interpretation};
pub use request::InterpretationRequest;
pub use transcript::{Generation, SERVICE_FAILURE_NOTICE, Transcript};

/// One event on an interpretation stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretationEvent {
    /// Incremental text content, concatenated verbatim by the receiver.
    TextDelta(String),
    /// The stream completed.
    Done,
    /// The stream terminated with an error.
    Error(String),
}
