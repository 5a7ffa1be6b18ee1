// src/main.rs

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use aibridge::RelayError;
use aibridge::llm::{AiService, ChatCallbacks, ChatCompletion, StreamChunk};

/// Sends one message through the persona relay and prints the streamed
/// reply to stdout.
#[derive(Parser)]
#[command(name = "aibridge", version)]
struct Args {
    /// Persona key as the chat service sends it (wayneAI, consultingAI,
    /// spellingAI, refuteAI, agentB, agentC)
    #[arg(short, long, default_value = "wayneAI")]
    persona: String,

    /// The user message to relay
    message: String,
}

struct StdoutCallbacks;

#[async_trait::async_trait]
impl ChatCallbacks for StdoutCallbacks {
    async fn on_start(&self) {
        info!("response started");
    }

    async fn on_chunk(&self, chunk: StreamChunk) {
        print!("{}", chunk.text);
        let _ = std::io::stdout().flush();
    }

    async fn on_complete(&self, completion: ChatCompletion) {
        println!();
        info!(chars = completion.content.chars().count(), "response complete");
    }

    async fn on_error(&self, error: &RelayError) {
        error!("response failed: {}", error);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let service = AiService::new();
    service
        .generate_response(&args.persona, &args.message, &StdoutCallbacks)
        .await?;

    Ok(())
}
