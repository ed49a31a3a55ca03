//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the operator actions (refresh, select view, toggle the co-pilot
//! panel, submit a message) and the read endpoints the dashboard polls.
//! The dashboard frontend is served elsewhere, hence the permissive CORS.

pub mod copilot;
pub mod dashboard;
pub mod fleet;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/view", put(dashboard::select_view))
        .route("/api/fleet", get(fleet::get_fleet))
        .route("/api/fleet/refresh", post(fleet::refresh))
        .route("/api/copilot/panel", put(copilot::set_panel))
        .route("/api/copilot/turns", get(copilot::list_turns))
        .route("/api/copilot/messages", post(copilot::submit_message))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
