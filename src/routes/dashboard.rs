//! Dashboard routes: the rendered view model and view selection.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use crate::services::dashboard::{DashboardView, View, build_dashboard};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SelectViewBody {
    pub view: View,
}

/// `GET /api/dashboard` — cards or request rows for the selected view.
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    Json(render(&state).await)
}

/// `PUT /api/view` — switch between the equipment grid and the request list.
pub async fn select_view(State(state): State<AppState>, Json(body): Json<SelectViewBody>) -> Json<DashboardView> {
    state.ui.write().await.view = body.view;
    Json(render(&state).await)
}

async fn render(state: &AppState) -> DashboardView {
    let ui = *state.ui.read().await;
    let snapshot = state.fleet.snapshot().await;
    build_dashboard(ui, &snapshot, state.copilot.is_configured())
}
