//! The Gemini streaming client.
//!
//! One request shape only: a single user turn carrying the derived
//! prompt, posted to `streamGenerateContent?alt=sse`. Candidate text
//! parts are forwarded as [`InterpretationEvent::TextDelta`]s in
//! arrival order; everything that can go wrong ends the stream with a
//! single terminal event instead of an `Err`.

use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::mpsc;

use crate::config::OracleConfig;
use crate::request::InterpretationRequest;
use crate::{InterpretationEvent, sse};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const STREAM_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_SSE_BUFFER_BYTES: usize = 4 * 1024 * 1024;
const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Notice emitted in place of content when no credential is configured.
pub const MISSING_KEY_NOTICE: &str =
    "API key is missing. Set GEMINI_API_KEY to consult the oracle.";

/// Build the `generateContent` request body for the given prompt.
fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "generationConfig": {
            "temperature": 1.0
        }
    })
}

// Typed view of a streamed response chunk. Gemini uses camelCase here.

#[derive(Debug, Deserialize)]
struct StreamChunk {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// What to do after parsing one SSE payload.
#[derive(Debug)]
enum ParseAction {
    /// Nothing to emit, keep reading.
    Continue,
    /// Emit these events; a trailing `Done`/`Error` ends the stream.
    Emit(Vec<InterpretationEvent>),
    /// The payload carried an error.
    Fail(String),
}

/// Map one decoded JSON payload to stream events.
fn parse_chunk(value: &Value) -> ParseAction {
    let chunk: StreamChunk = match serde_json::from_value(value.clone()) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::warn!(%e, "unparseable interpretation stream payload");
            return ParseAction::Continue;
        }
    };

    if let Some(error) = chunk.error {
        let message = error
            .message
            .unwrap_or_else(|| "interpretation service error".to_string());
        return ParseAction::Fail(message);
    }

    let mut events = Vec::new();
    let mut finished = false;

    for candidate in chunk.candidates.unwrap_or_default() {
        // Content first: a chunk may carry both final text and the
        // finish reason.
        if let Some(content) = candidate.content
            && let Some(parts) = content.parts
        {
            for part in parts {
                if let Some(text) = part.text
                    && !text.is_empty()
                {
                    events.push(InterpretationEvent::TextDelta(text));
                }
            }
        }

        if let Some(reason) = candidate.finish_reason {
            if reason == "STOP" {
                finished = true;
            } else {
                return ParseAction::Fail(format!("generation stopped: {reason}"));
            }
        }
    }

    if finished {
        events.push(InterpretationEvent::Done);
    }
    if events.is_empty() {
        ParseAction::Continue
    } else {
        ParseAction::Emit(events)
    }
}

async fn send_event(tx: &mpsc::Sender<InterpretationEvent>, event: InterpretationEvent) -> bool {
    tx.send(event).await.is_ok()
}

/// Read an error response body, capped so a hostile response cannot
/// balloon memory.
async fn read_capped_error_body(response: reqwest::Response) -> String {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Stream an interpretation for the given request.
///
/// All outcomes arrive on the channel: text deltas, then exactly one
/// terminal `Done` or `Error`. A missing API key short-circuits to the
/// notice fragment without any HTTP traffic. The function never retries;
/// regenerating is the caller's decision.
pub async fn stream_interpretation(
    config: &OracleConfig,
    request: &InterpretationRequest,
    tx: mpsc::Sender<InterpretationEvent>,
) {
    let Some(api_key) = config.api_key.as_deref() else {
        if send_event(&tx, InterpretationEvent::TextDelta(MISSING_KEY_NOTICE.to_string())).await {
            let _ = send_event(&tx, InterpretationEvent::Done).await;
        }
        return;
    };

    let url = format!(
        "{}/models/{}:streamGenerateContent?alt=sse",
        config.api_base, config.model
    );
    let body = build_request_body(&request.prompt());

    let client = match reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            let _ = send_event(
                &tx,
                InterpretationEvent::Error(format!("HTTP client: {e}")),
            )
            .await;
            return;
        }
    };

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            let _ = send_event(&tx, InterpretationEvent::Error(format!("request failed: {e}")))
                .await;
            return;
        }
    };

    if !response.status().is_success() {
        let status = response.status();
        let error_text = read_capped_error_body(response).await;
        let _ = send_event(
            &tx,
            InterpretationEvent::Error(format!("API error {status}: {error_text}")),
        )
        .await;
        return;
    }

    process_sse_stream(response, &tx).await;
}

/// Drive the SSE byte stream to a terminal event.
async fn process_sse_stream(response: reqwest::Response, tx: &mpsc::Sender<InterpretationEvent>) {
    let mut stream = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::new();

    loop {
        let Ok(next) = tokio::time::timeout(STREAM_IDLE_TIMEOUT, stream.next()).await else {
            let _ = send_event(tx, InterpretationEvent::Error("stream idle timeout".into())).await;
            return;
        };

        let Some(chunk) = next else { break };
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ =
                    send_event(tx, InterpretationEvent::Error(format!("stream read: {e}"))).await;
                return;
            }
        };
        buffer.extend_from_slice(&chunk);

        if buffer.len() > MAX_SSE_BUFFER_BYTES {
            let _ = send_event(
                tx,
                InterpretationEvent::Error("stream buffer exceeded maximum size".into()),
            )
            .await;
            return;
        }

        while let Some(event) = sse::drain_event(&mut buffer) {
            if event.is_empty() {
                continue;
            }

            let Ok(event) = std::str::from_utf8(&event) else {
                let _ = send_event(
                    tx,
                    InterpretationEvent::Error("invalid UTF-8 on stream".into()),
                )
                .await;
                return;
            };

            let Some(data) = sse::extract_data(event) else {
                continue;
            };

            if data == "[DONE]" {
                let _ = send_event(tx, InterpretationEvent::Done).await;
                return;
            }

            let value: Value = match serde_json::from_str(&data) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(%e, payload_bytes = data.len(), "invalid stream payload");
                    continue;
                }
            };

            match parse_chunk(&value) {
                ParseAction::Continue => {}
                ParseAction::Emit(events) => {
                    for event in events {
                        let terminal = matches!(
                            &event,
                            InterpretationEvent::Done | InterpretationEvent::Error(_)
                        );
                        if !send_event(tx, event).await || terminal {
                            return;
                        }
                    }
                }
                ParseAction::Fail(message) => {
                    let _ = send_event(tx, InterpretationEvent::Error(message)).await;
                    return;
                }
            }
        }
    }

    // Connection closed without a completion signal.
    let _ = send_event(
        tx,
        InterpretationEvent::Error("connection closed before the stream completed".into()),
    )
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zy_core::HexagramTable;

    fn request() -> InterpretationRequest {
        let table = HexagramTable::new().unwrap();
        InterpretationRequest::new(table.by_id(49).unwrap())
    }

    async fn collect_events(config: OracleConfig) -> Vec<InterpretationEvent> {
        let (tx, mut rx) = mpsc::channel(32);
        stream_interpretation(&config, &request(), tx).await;
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    fn delta(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn request_body_shape() {
        let body = build_request_body("tell me");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "tell me");
        assert_eq!(body["generationConfig"]["temperature"], 1.0);
    }

    #[test]
    fn parse_chunk_text_delta() {
        let value: Value = serde_json::from_str(&delta("hi")).unwrap();
        match parse_chunk(&value) {
            ParseAction::Emit(events) => {
                assert_eq!(events, vec![InterpretationEvent::TextDelta("hi".into())]);
            }
            other => panic!("expected emit, got {other:?}"),
        }
    }

    #[test]
    fn parse_chunk_stop_after_text() {
        let value = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "end" }] },
                "finishReason": "STOP"
            }]
        });
        match parse_chunk(&value) {
            ParseAction::Emit(events) => {
                assert_eq!(
                    events,
                    vec![
                        InterpretationEvent::TextDelta("end".into()),
                        InterpretationEvent::Done,
                    ]
                );
            }
            other => panic!("expected emit, got {other:?}"),
        }
    }

    #[test]
    fn parse_chunk_non_stop_finish_fails() {
        let value = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        assert!(matches!(parse_chunk(&value), ParseAction::Fail(_)));
    }

    #[test]
    fn parse_chunk_error_payload() {
        let value = json!({ "error": { "message": "quota exhausted" } });
        match parse_chunk(&value) {
            ParseAction::Fail(message) => assert_eq!(message, "quota exhausted"),
            other => panic!("expected fail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_degrades_to_notice() {
        let config = OracleConfig::default().with_api_base("http://127.0.0.1:9");
        let events = collect_events(config).await;
        assert_eq!(
            events,
            vec![
                InterpretationEvent::TextDelta(MISSING_KEY_NOTICE.to_string()),
                InterpretationEvent::Done,
            ]
        );
    }

    #[tokio::test]
    async fn streams_fragments_in_order() {
        let server = MockServer::start().await;
        let body = format!(
            "data: {}\n\ndata: {}\n\n",
            delta("Hello "),
            json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "World" }] },
                    "finishReason": "STOP"
                }]
            })
        );
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:streamGenerateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .mount(&server)
            .await;

        let config = OracleConfig::default()
            .with_api_key("test-key")
            .with_api_base(server.uri());
        let events = collect_events(config).await;
        assert_eq!(
            events,
            vec![
                InterpretationEvent::TextDelta("Hello ".into()),
                InterpretationEvent::TextDelta("World".into()),
                InterpretationEvent::Done,
            ]
        );
    }

    #[tokio::test]
    async fn http_error_becomes_terminal_event() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let config = OracleConfig::default()
            .with_api_key("test-key")
            .with_api_base(server.uri());
        let events = collect_events(config).await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            InterpretationEvent::Error(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mid_stream_error_preserves_partial_text() {
        let server = MockServer::start().await;
        let body = format!(
            "data: {}\n\ndata: {}\n\n",
            delta("Partial"),
            json!({ "error": { "message": "quota exhausted" } })
        );
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .mount(&server)
            .await;

        let config = OracleConfig::default()
            .with_api_key("test-key")
            .with_api_base(server.uri());
        let events = collect_events(config).await;
        assert_eq!(
            events,
            vec![
                InterpretationEvent::TextDelta("Partial".into()),
                InterpretationEvent::Error("quota exhausted".into()),
            ]
        );
    }

    #[tokio::test]
    async fn premature_eof_becomes_error() {
        let server = MockServer::start().await;
        let body = format!("data: {}\n\n", delta("Half"));
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .mount(&server)
            .await;

        let config = OracleConfig::default()
            .with_api_key("test-key")
            .with_api_base(server.uri());
        let events = collect_events(config).await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], InterpretationEvent::TextDelta("Half".into()));
        assert!(matches!(events[1], InterpretationEvent::Error(_)));
    }

    #[tokio::test]
    async fn done_marker_ends_stream() {
        let server = MockServer::start().await;
        let body = format!("data: {}\n\ndata: [DONE]\n\n", delta("All"));
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .mount(&server)
            .await;

        let config = OracleConfig::default()
            .with_api_key("test-key")
            .with_api_base(server.uri());
        let events = collect_events(config).await;
        assert_eq!(
            events,
            vec![
                InterpretationEvent::TextDelta("All".into()),
                InterpretationEvent::Done,
            ]
        );
    }
}
