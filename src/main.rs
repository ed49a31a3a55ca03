mod config;
mod conversation;
mod fleet;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::LlmChat;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let source = fleet::source::HttpFleetSource::new(&config.fleet).expect("fleet HTTP client init failed");
    tracing::info!(url = source.url(), "fleet source configured");

    // Initialize LLM client (non-fatal: every co-pilot reply is the failure message if config missing).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — AI features disabled");
            None
        }
    };

    let state = state::AppState::new(Arc::new(source), llm);

    // Initial load; the dashboard shows an empty fleet until it resolves.
    let initial = state.loader.clone();
    tokio::spawn(async move {
        initial.load().await;
    });

    let port = config.port;
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gearguard listening");
    axum::serve(listener, app).await.expect("server failed");
}
