use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Both external credentials are optional on purpose: the service must start
/// and serve the synthetic job-listing path even with no keys configured
/// (offline / test deployments). The health endpoint reports their presence.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key for the two LLM stages. `None` disables live parsing.
    pub gemini_api_key: Option<String>,
    /// RapidAPI key shared by both live job-search providers.
    pub rapidapi_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating missing *and* empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
