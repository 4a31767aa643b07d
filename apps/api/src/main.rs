mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod pipeline;
mod providers;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::providers::{JSearchProvider, JobProvider, LinkedInProvider, SyntheticProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-jobs API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!(
        "LLM client initialized (model: {}, credential: {})",
        llm_client::MODEL,
        if llm.is_configured() { "present" } else { "absent" }
    );

    // Provider strategy list in strict fallback order. Synthetic last: the
    // chain must never come back empty for a well-formed request.
    let providers: Vec<Arc<dyn JobProvider>> = vec![
        Arc::new(JSearchProvider::new(config.rapidapi_key.clone())),
        Arc::new(LinkedInProvider::new(config.rapidapi_key.clone())),
        Arc::new(SyntheticProvider),
    ];
    for provider in &providers {
        info!(
            "Job provider '{}': {}",
            provider.name(),
            if provider.is_configured() { "configured" } else { "not configured" }
        );
    }

    let state = AppState {
        llm,
        providers: Arc::new(providers),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
