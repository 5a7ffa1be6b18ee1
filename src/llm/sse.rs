// src/llm/sse.rs
// Incremental decoder for the completion endpoint's SSE wire format.
// Frame boundaries are independent of transport chunk boundaries, so the
// decoder buffers raw bytes and only interprets complete lines; feeding the
// same bytes in any split produces the same events.

use serde_json::Value;
use tracing::{debug, warn};

/// Termination sentinel sent as the final frame of a completion stream.
const DONE_SENTINEL: &str = "data: [DONE]";

/// Prefix carried by every data frame.
const DATA_PREFIX: &str = "data: ";

/// One decoded wire event. A framed line maps to at most one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Incremental text fragment from `choices[0].delta.content`.
    Delta(String),
    /// The stream's termination sentinel arrived.
    Done,
    /// A data frame that could not be parsed. Skipped, never fatal.
    Malformed,
}

/// Resumable line-oriented decoder. One instance lives for exactly one
/// request and owns the not-yet-framed byte tail.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an inbound piece and drains every complete line from the
    /// buffer. A partial line (no terminator yet) stays buffered for the
    /// next feed; a multi-byte character split across pieces reassembles
    /// because bytes are only decoded once its line is complete.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line_bytes: Vec<u8> = self.buffer.drain(..=pos).collect();

            let line = match std::str::from_utf8(&line_bytes[..pos]) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!("skipping non-UTF-8 frame: {}", e);
                    events.push(SseEvent::Malformed);
                    continue;
                }
            };

            if line.is_empty() {
                continue;
            }

            if line == DONE_SENTINEL {
                events.push(SseEvent::Done);
                // Nothing after the sentinel is examined.
                return events;
            }

            if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
                match serde_json::from_str::<Value>(payload) {
                    Ok(frame) => {
                        if let Some(delta) = extract_delta(&frame) {
                            events.push(SseEvent::Delta(delta));
                        }
                    }
                    Err(e) => {
                        // One bad frame must never abort the stream.
                        warn!("skipping malformed frame: {}", e);
                        events.push(SseEvent::Malformed);
                    }
                }
                continue;
            }

            // Comments, event-type lines, anything else: not ours.
            debug!("ignoring non-data line: {}", line);
        }

        events
    }
}

/// Pulls the delta text out of a parsed frame. Absent or empty content
/// means the frame carried no text this time.
fn extract_delta(frame: &Value) -> Option<String> {
    frame
        .pointer("/choices/0/delta/content")
        .and_then(|c| c.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
