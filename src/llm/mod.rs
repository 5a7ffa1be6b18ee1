// src/llm/mod.rs
// Streaming relay to the completion endpoint: outbound client, SSE decode,
// and the chunk dispatch loop that feeds the consumer callbacks.

pub mod chat;
pub mod client;
pub mod sse;

pub use chat::{AiService, ChatCallbacks, ChatCompletion, StreamChunk, relay_stream};
pub use client::OpenAIClient;
pub use sse::{SseDecoder, SseEvent};
