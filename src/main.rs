//! Research Assistant - conversational research UI
//!
//! Serves a single-page chat UI and routes each question to a hosted
//! agent with optional web search and vector store search.

mod agent;
mod api;
mod config;
mod markdown;
mod session;
mod transcript;

use agent::{LoggingGateway, OpenAIGateway};
use api::{create_router, AppState};
use config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often idle sessions are swept
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "research_assistant=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Missing credentials are fatal
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration, refusing to start");
    })?;

    let gateway = OpenAIGateway::new(&config)?;
    let gateway = Arc::new(LoggingGateway::new(Arc::new(gateway)));
    tracing::info!(
        model = %config.model,
        vector_store_id = %config.vector_store_id,
        file_search_max_results = config.file_search_max_results,
        timeout_secs = config.agent_timeout.as_secs(),
        "Agent gateway initialized"
    );

    let state = AppState::new(gateway, config.session_idle_timeout);
    state.sessions.spawn_pruner(SESSION_SWEEP_INTERVAL);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Research Assistant listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
