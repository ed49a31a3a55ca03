//! Fleet routes: read the live fleet, trigger a reload.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::fleet::{FleetOrigin, FleetState};
use crate::state::AppState;

#[derive(Serialize)]
pub struct FleetResponse {
    pub origin: FleetOrigin,
    pub generation: u64,
    #[serde(flatten)]
    pub state: FleetState,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub origin: FleetOrigin,
    pub generation: u64,
    pub applied: bool,
    pub equipment: usize,
    pub requests: usize,
}

/// `GET /api/fleet` — the live fleet as last applied.
pub async fn get_fleet(State(state): State<AppState>) -> Json<FleetResponse> {
    let snap = state.fleet.snapshot().await;
    Json(FleetResponse { origin: snap.origin, generation: snap.generation, state: (*snap.state).clone() })
}

/// `POST /api/fleet/refresh` — run the loader once. Never fails: an
/// unreachable endpoint reports `origin: "fallback"`.
pub async fn refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let outcome = state.loader.load().await;
    Json(RefreshResponse {
        origin: outcome.origin,
        generation: outcome.generation,
        applied: outcome.applied,
        equipment: outcome.state.equipment.len(),
        requests: outcome.state.requests.len(),
    })
}
