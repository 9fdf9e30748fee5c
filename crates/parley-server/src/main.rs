//! Parley chat relay server

mod args;
mod error;
mod routes;

use anyhow::Context;
use args::Args;
use clap::Parser;
use parley_core::{
    AnthropicClient, ConversationStore, MessageProcessor, ModelParameters, ProviderConfig,
    TimeoutConfig,
};
use routes::AppState;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = ProviderConfig::from_env();
    if !config.has_api_key() {
        // Startup proceeds; each chat request will fail with a
        // configuration error until the credential is provided.
        warn!("ANTHROPIC_API_KEY is not set; chat requests will be rejected");
    }

    let mut params = ModelParameters::default();
    if let Some(model) = args.model {
        params.model = model;
    }
    if let Some(max_tokens) = args.max_tokens {
        params.max_tokens = max_tokens;
    }

    let timeouts = TimeoutConfig::default();
    let http_client = reqwest::Client::builder()
        .connect_timeout(timeouts.connection_timeout())
        .timeout(timeouts.request_timeout())
        .build()
        .context("failed to build HTTP client")?;

    let backend = Arc::new(AnthropicClient::new(config, params, http_client));
    let store = Arc::new(ConversationStore::new());
    let processor = Arc::new(MessageProcessor::new(store, backend));

    let app = routes::router(AppState { processor });

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
