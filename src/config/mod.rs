// src/config/mod.rs
// All values load from the environment (and .env when present); defaults
// match what the chat backend ships with.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    // ── OpenAI Configuration
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,

    // ── Timeouts (in seconds)
    pub openai_timeout: u64,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            openai_api_key: env_var_or("OPENAI_API_KEY", String::new()),
            openai_base_url: env_var_or(
                "OPENAI_BASE_URL",
                "https://api.openai.com/v1".to_string(),
            ),
            model: env_var_or("AIBRIDGE_MODEL", "gpt-4o-mini".to_string()),
            temperature: env_var_or("AIBRIDGE_TEMPERATURE", 0.7),
            openai_timeout: env_var_or("AIBRIDGE_OPENAI_TIMEOUT", 120),
        }
    }
}

pub static CONFIG: Lazy<RelayConfig> = Lazy::new(RelayConfig::from_env);
