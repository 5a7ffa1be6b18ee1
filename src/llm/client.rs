// src/llm/client.rs
// Thin reqwest client for the chat completions endpoint. No wrappers; the
// SSE body comes back as a raw byte stream for the decoder to frame.

use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::{Client, header};
use serde::Serialize;
use tracing::debug;

use crate::config::{CONFIG, RelayConfig};
use crate::error::RelayError;

/// Raw SSE body: arbitrarily-sized byte pieces in arrival order.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, RelayError>> + Send>>;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
}

impl OpenAIClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &RelayConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.openai_api_key.clone(),
            api_base: config.openai_base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Opens a streamed chat completion. Connection and HTTP-level
    /// rejections surface as `UpstreamConnection`; anything that fails
    /// after the stream is established is a `StreamIo` item.
    pub async fn open_chat_stream(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<ByteStream, RelayError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_message },
            ],
            temperature: self.temperature,
            stream: true,
        };

        debug!(model = %self.model, "opening completion stream");

        let resp = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "text/event-stream")
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::UpstreamConnection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(RelayError::UpstreamConnection(format!(
                "{}: {}",
                status, error_text
            )));
        }

        let stream = resp
            .bytes_stream()
            .map(|piece| piece.map_err(|e| RelayError::StreamIo(e.to_string())));
        Ok(Box::pin(stream))
    }
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new()
    }
}
