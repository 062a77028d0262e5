//! Fragment accumulation with staleness handling.

use crate::InterpretationEvent;

/// Notice appended once when a stream fails mid-flight.
pub const SERVICE_FAILURE_NOTICE: &str =
    "\n\n[The oracle is silent. Please check your connection and try again.]";

/// Ticket identifying one interpretation request.
///
/// Issued by [`Transcript::begin`]; every fragment of the stream it
/// started must carry it back through [`Transcript::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Accumulates the visible interpretation text for the newest request.
///
/// Each `begin` supersedes everything before it: fragments tagged with
/// an older generation are dropped, which is what logically cancels an
/// in-flight stream when the user regenerates or switches hexagram. No
/// flags on the producer side are needed; a stale stream may keep
/// pushing, its fragments just never land.
#[derive(Debug, Default)]
pub struct Transcript {
    current: u64,
    text: String,
    finished: bool,
}

impl Transcript {
    /// An empty transcript with no request started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new interpretation request: discard accumulated text and
    /// issue the generation ticket for the new stream.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        self.text.clear();
        self.finished = false;
        Generation(self.current)
    }

    /// Apply one stream event.
    ///
    /// Returns true if the event was current and landed; false if it
    /// belonged to a superseded request (or arrived after the terminal
    /// event) and was discarded.
    pub fn apply(&mut self, generation: Generation, event: &InterpretationEvent) -> bool {
        if generation.0 != self.current {
            tracing::debug!(
                stale = generation.0,
                current = self.current,
                "discarding fragment from superseded stream"
            );
            return false;
        }
        if self.finished {
            return false;
        }

        match event {
            InterpretationEvent::TextDelta(fragment) => {
                self.text.push_str(fragment);
            }
            InterpretationEvent::Done => {
                self.finished = true;
            }
            InterpretationEvent::Error(message) => {
                tracing::warn!(%message, "interpretation stream failed");
                self.text.push_str(SERVICE_FAILURE_NOTICE);
                self.finished = true;
            }
        }
        true
    }

    /// The accumulated text of the current request.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True once the current request's stream reached a terminal event.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(text: &str) -> InterpretationEvent {
        InterpretationEvent::TextDelta(text.to_string())
    }

    #[test]
    fn fragments_concatenate_verbatim() {
        let mut transcript = Transcript::new();
        let generation = transcript.begin();
        assert!(transcript.apply(generation, &delta("Hello ")));
        assert!(transcript.apply(generation, &delta("World")));
        assert!(transcript.apply(generation, &InterpretationEvent::Done));
        assert_eq!(transcript.text(), "Hello World");
        assert!(transcript.is_finished());
    }

    #[test]
    fn error_appends_notice_once() {
        let mut transcript = Transcript::new();
        let generation = transcript.begin();
        transcript.apply(generation, &delta("Partial"));
        transcript.apply(generation, &InterpretationEvent::Error("boom".into()));
        assert_eq!(
            transcript.text(),
            format!("Partial{SERVICE_FAILURE_NOTICE}")
        );
        assert!(transcript.is_finished());

        // A duplicate terminal event must not append a second notice.
        assert!(!transcript.apply(generation, &InterpretationEvent::Error("again".into())));
        assert_eq!(
            transcript.text(),
            format!("Partial{SERVICE_FAILURE_NOTICE}")
        );
    }

    #[test]
    fn stale_fragments_are_discarded() {
        let mut transcript = Transcript::new();
        let old = transcript.begin();
        transcript.apply(old, &delta("from the old stream "));

        // Regenerate while the old stream is still delivering.
        let new = transcript.begin();
        assert!(!transcript.apply(old, &delta("stale tail")));
        assert!(transcript.apply(new, &delta("fresh text")));
        assert!(!transcript.apply(old, &InterpretationEvent::Done));
        assert!(transcript.apply(new, &InterpretationEvent::Done));

        assert_eq!(transcript.text(), "fresh text");
    }

    #[test]
    fn begin_discards_accumulated_text() {
        let mut transcript = Transcript::new();
        let first = transcript.begin();
        transcript.apply(first, &delta("old"));
        transcript.apply(first, &InterpretationEvent::Done);

        transcript.begin();
        assert_eq!(transcript.text(), "");
        assert!(!transcript.is_finished());
    }

    #[test]
    fn fragments_after_done_are_dropped() {
        let mut transcript = Transcript::new();
        let generation = transcript.begin();
        transcript.apply(generation, &delta("body"));
        transcript.apply(generation, &InterpretationEvent::Done);
        assert!(!transcript.apply(generation, &delta("late")));
        assert_eq!(transcript.text(), "body");
    }
}
