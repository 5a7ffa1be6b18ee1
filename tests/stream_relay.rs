// tests/stream_relay.rs
// End-to-end dispatch tests over in-memory byte streams: callback ordering,
// accumulation, the spelling rewrite, and the fatal error paths.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;

use aibridge::RelayError;
use aibridge::llm::{AiService, ChatCallbacks, ChatCompletion, StreamChunk, relay_stream};
use aibridge::persona::AiPersona;

/// Everything the relay told us, in invocation order.
#[derive(Debug, PartialEq, Eq)]
enum Callback {
    Start,
    Chunk { text: String, is_code_block: bool },
    Complete { content: String },
    Error { message: String },
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Callback>>,
}

impl Recorder {
    fn calls(&self) -> Vec<Callback> {
        self.calls.lock().unwrap().drain(..).collect()
    }
}

#[async_trait]
impl ChatCallbacks for Recorder {
    async fn on_start(&self) {
        self.calls.lock().unwrap().push(Callback::Start);
    }

    async fn on_chunk(&self, chunk: StreamChunk) {
        self.calls.lock().unwrap().push(Callback::Chunk {
            text: chunk.text,
            is_code_block: chunk.is_code_block,
        });
    }

    async fn on_complete(&self, completion: ChatCompletion) {
        self.calls.lock().unwrap().push(Callback::Complete {
            content: completion.content,
        });
    }

    async fn on_error(&self, error: &RelayError) {
        self.calls.lock().unwrap().push(Callback::Error {
            message: error.to_string(),
        });
    }
}

fn delta_frame(text: &str) -> String {
    format!(
        "data: {}\n",
        serde_json::json!({"choices": [{"delta": {"content": text}}]})
    )
}

fn pieces(parts: Vec<String>) -> impl futures::Stream<Item = Result<Bytes, RelayError>> + Unpin {
    stream::iter(
        parts
            .into_iter()
            .map(|p| Ok(Bytes::from(p.into_bytes())))
            .collect::<Vec<_>>(),
    )
}

#[tokio::test]
async fn fragments_accumulate_across_pieces() {
    let recorder = Recorder::default();
    let stream = pieces(vec![
        delta_frame("안"),
        delta_frame("녕 괜찮아?"),
        "data: [DONE]\n".to_string(),
    ]);

    let result = relay_stream(stream, AiPersona::WayneAi, &recorder).await.unwrap();

    assert_eq!(result, "안녕 괜찮아?");
    assert_eq!(
        recorder.calls(),
        vec![
            Callback::Chunk { text: "안".into(), is_code_block: false },
            Callback::Chunk { text: "녕 괜찮아?".into(), is_code_block: false },
            Callback::Complete { content: "안녕 괜찮아?".into() },
        ]
    );
}

#[tokio::test]
async fn spelling_persona_rewrites_completed_text_only() {
    let recorder = Recorder::default();
    let stream = pieces(vec![
        delta_frame("안"),
        delta_frame("녕 괜찮아?"),
        "data: [DONE]\n".to_string(),
    ]);

    let result = relay_stream(stream, AiPersona::SpellingAi, &recorder).await.unwrap();

    // The consumer sees the rewritten text; the returned value stays raw.
    assert_eq!(result, "안녕 괜찮아?");
    assert_eq!(
        recorder.calls(),
        vec![
            Callback::Chunk { text: "안".into(), is_code_block: false },
            Callback::Chunk { text: "녕 괜찮아?".into(), is_code_block: false },
            Callback::Complete { content: "안녕 괜찬아?".into() },
        ]
    );
}

#[tokio::test]
async fn done_only_stream_completes_empty() {
    let recorder = Recorder::default();
    let stream = pieces(vec!["data: [DONE]\n".to_string()]);

    let result = relay_stream(stream, AiPersona::WayneAi, &recorder).await.unwrap();

    assert_eq!(result, "");
    assert_eq!(
        recorder.calls(),
        vec![Callback::Complete { content: "".into() }]
    );
}

#[tokio::test]
async fn completed_text_is_trimmed() {
    let recorder = Recorder::default();
    let stream = pieces(vec![
        delta_frame("  spaced "),
        delta_frame("out  "),
        "data: [DONE]\n".to_string(),
    ]);

    let result = relay_stream(stream, AiPersona::WayneAi, &recorder).await.unwrap();

    assert_eq!(result, "spaced out");
    // Chunks are forwarded verbatim; only the final text is trimmed.
    assert_eq!(
        recorder.calls(),
        vec![
            Callback::Chunk { text: "  spaced ".into(), is_code_block: false },
            Callback::Chunk { text: "out  ".into(), is_code_block: false },
            Callback::Complete { content: "spaced out".into() },
        ]
    );
}

#[tokio::test]
async fn code_fence_markers_toggle_per_occurrence() {
    let recorder = Recorder::default();
    let stream = pieces(vec![
        delta_frame("before"),
        delta_frame("```rust"),
        delta_frame("let x = 1;"),
        delta_frame("```"),
        delta_frame("after"),
        delta_frame("```a``` inline"),
        "data: [DONE]\n".to_string(),
    ]);

    relay_stream(stream, AiPersona::WayneAi, &recorder).await.unwrap();

    let flags: Vec<bool> = recorder
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Callback::Chunk { is_code_block, .. } => Some(is_code_block),
            _ => None,
        })
        .collect();

    // One marker flips the state, two markers in one fragment cancel out.
    assert_eq!(flags, vec![false, true, true, false, false, false]);
}

#[tokio::test]
async fn malformed_frame_does_not_lose_valid_content() {
    let recorder = Recorder::default();
    let stream = pieces(vec![
        delta_frame("first"),
        "data: {broken\n".to_string(),
        delta_frame("second"),
        "data: [DONE]\n".to_string(),
    ]);

    let result = relay_stream(stream, AiPersona::WayneAi, &recorder).await.unwrap();

    assert_eq!(result, "firstsecond");
    assert_eq!(
        recorder.calls(),
        vec![
            Callback::Chunk { text: "first".into(), is_code_block: false },
            Callback::Chunk { text: "second".into(), is_code_block: false },
            Callback::Complete { content: "firstsecond".into() },
        ]
    );
}

#[tokio::test]
async fn stream_error_after_fragments_reports_once() {
    let recorder = Recorder::default();
    let items: Vec<Result<Bytes, RelayError>> = vec![
        Ok(Bytes::copy_from_slice(delta_frame("one").as_bytes())),
        Ok(Bytes::copy_from_slice(delta_frame("two").as_bytes())),
        Err(RelayError::StreamIo("connection reset".into())),
    ];

    let result = relay_stream(stream::iter(items), AiPersona::WayneAi, &recorder).await;

    assert!(matches!(result, Err(RelayError::StreamIo(_))));
    assert_eq!(
        recorder.calls(),
        vec![
            Callback::Chunk { text: "one".into(), is_code_block: false },
            Callback::Chunk { text: "two".into(), is_code_block: false },
            Callback::Error { message: "completion stream failed: connection reset".into() },
        ]
    );
}

#[tokio::test]
async fn stream_ending_without_sentinel_is_an_error() {
    let recorder = Recorder::default();
    let stream = pieces(vec![delta_frame("unterminated")]);

    let result = relay_stream(stream, AiPersona::WayneAi, &recorder).await;

    assert!(matches!(result, Err(RelayError::StreamIo(_))));
    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Callback::Chunk { .. }));
    assert!(matches!(calls[1], Callback::Error { .. }));
}

#[tokio::test]
async fn unknown_persona_is_rejected_before_any_callback() {
    let recorder = Recorder::default();
    let service = AiService::new();

    let result = service.generate_response("ghostAI", "hello", &recorder).await;

    match result {
        Err(RelayError::UnknownPersona(key)) => assert_eq!(key, "ghostAI"),
        other => panic!("expected UnknownPersona, got {:?}", other.map(|_| ())),
    }
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn single_piece_and_split_pieces_agree() {
    let whole_input = format!(
        "{}{}data: [DONE]\n",
        delta_frame("스트"),
        delta_frame("리밍")
    );

    let whole = Recorder::default();
    relay_stream(
        pieces(vec![whole_input.clone()]),
        AiPersona::WayneAi,
        &whole,
    )
    .await
    .unwrap();

    // Same bytes, re-split at an arbitrary boundary inside a frame.
    let (left, right) = whole_input.as_bytes().split_at(11);
    let split = Recorder::default();
    let items: Vec<Result<Bytes, RelayError>> = vec![
        Ok(Bytes::copy_from_slice(left)),
        Ok(Bytes::copy_from_slice(right)),
    ];
    relay_stream(stream::iter(items), AiPersona::WayneAi, &split)
        .await
        .unwrap();

    assert_eq!(whole.calls(), split.calls());
}
