// src/llm/chat.rs
// The dispatch loop: drives the SSE decoder over a live byte stream and
// invokes the consumer callbacks in order. Processing is pull-based, so the
// next piece is only read after the current fragment's callback has been
// awaited; fragment delivery is strictly sequential by construction.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use bytes::Bytes;
use tracing::{debug, info};

use crate::error::RelayError;
use crate::llm::client::OpenAIClient;
use crate::llm::sse::{SseDecoder, SseEvent};
use crate::persona::AiPersona;
use crate::prompt::build_system_prompt;
use crate::transform::misspell;

/// Marker the chat UI uses to fence code; state flips on every occurrence.
const CODE_FENCE: &str = "```";

/// One delivered fragment, tagged with the code-block state after this
/// fragment's fences were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamChunk {
    pub text: String,
    pub is_code_block: bool,
}

/// The finished response as delivered to the consumer. For the spelling
/// persona this is the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    pub content: String,
}

/// Consumer contract. For a request that reaches `on_start`, exactly one of
/// `on_complete` / `on_error` fires, after zero or more `on_chunk` calls in
/// stream arrival order.
#[async_trait]
pub trait ChatCallbacks: Send + Sync {
    async fn on_start(&self);
    async fn on_chunk(&self, chunk: StreamChunk);
    async fn on_complete(&self, completion: ChatCompletion);
    async fn on_error(&self, error: &RelayError);
}

/// Persona-aware relay to the completion endpoint.
pub struct AiService {
    client: OpenAIClient,
}

impl AiService {
    pub fn new() -> Self {
        Self { client: OpenAIClient::new() }
    }

    pub fn with_client(client: OpenAIClient) -> Self {
        Self { client }
    }

    /// Streams one response for `message` as the given persona, invoking
    /// `callbacks` along the way. Returns the trimmed accumulated text,
    /// always untransformed, even when `on_complete` delivered the
    /// rewritten version. An unrecognized persona key fails before any
    /// callback or network call.
    pub async fn generate_response(
        &self,
        persona_key: &str,
        message: &str,
        callbacks: &dyn ChatCallbacks,
    ) -> Result<String, RelayError> {
        let persona: AiPersona = persona_key
            .parse()
            .map_err(|_| RelayError::UnknownPersona(persona_key.to_string()))?;

        let system_prompt = build_system_prompt(persona);
        info!(persona = %persona, "starting AI response");

        callbacks.on_start().await;

        let stream = match self.client.open_chat_stream(&system_prompt, message).await {
            Ok(stream) => stream,
            Err(e) => {
                callbacks.on_error(&e).await;
                return Err(e);
            }
        };

        relay_stream(stream, persona, callbacks).await
    }
}

impl Default for AiService {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes `stream` fragment by fragment and dispatches the callbacks.
/// Public so any byte source satisfying the stream shape can drive it.
pub async fn relay_stream(
    mut stream: impl Stream<Item = Result<Bytes, RelayError>> + Unpin,
    persona: AiPersona,
    callbacks: &dyn ChatCallbacks,
) -> Result<String, RelayError> {
    let mut decoder = SseDecoder::new();
    let mut full_response = String::new();
    let mut is_code_block = false;

    while let Some(piece) = stream.next().await {
        let bytes = match piece {
            Ok(bytes) => bytes,
            Err(e) => {
                callbacks.on_error(&e).await;
                return Err(e);
            }
        };

        for event in decoder.feed(&bytes) {
            match event {
                SseEvent::Delta(text) => {
                    // Each fence marker in the fragment flips the state;
                    // two markers in one fragment cancel out.
                    for _ in text.matches(CODE_FENCE) {
                        is_code_block = !is_code_block;
                    }

                    full_response.push_str(&text);
                    callbacks
                        .on_chunk(StreamChunk { text, is_code_block })
                        .await;
                }
                SseEvent::Done => {
                    let final_text = full_response.trim().to_string();
                    let delivered = if persona.forces_misspelling() {
                        misspell(&final_text)
                    } else {
                        final_text.clone()
                    };

                    debug!(chars = final_text.chars().count(), "stream complete");
                    callbacks
                        .on_complete(ChatCompletion { content: delivered })
                        .await;
                    return Ok(final_text);
                }
                // Already warn-logged by the decoder; the stream goes on.
                SseEvent::Malformed => {}
            }
        }
    }

    let err = RelayError::StreamIo("stream ended before the [DONE] sentinel".into());
    callbacks.on_error(&err).await;
    Err(err)
}
