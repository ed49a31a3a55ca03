//! Co-pilot routes: panel toggle, conversation log, message submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::conversation::ConversationTurn;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PanelBody {
    pub open: bool,
}

#[derive(Serialize)]
pub struct PanelResponse {
    pub open: bool,
}

#[derive(Deserialize)]
pub struct SubmitBody {
    pub text: String,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    /// Index of the appended user turn in `GET /api/copilot/turns`.
    pub user_turn: usize,
}

/// `PUT /api/copilot/panel` — open or close the co-pilot panel.
pub async fn set_panel(State(state): State<AppState>, Json(body): Json<PanelBody>) -> Json<PanelResponse> {
    state.ui.write().await.copilot_open = body.open;
    Json(PanelResponse { open: body.open })
}

/// `GET /api/copilot/turns` — the full conversation log in display order.
pub async fn list_turns(State(state): State<AppState>) -> Json<Vec<ConversationTurn>> {
    Json(state.conversation.turns())
}

/// `POST /api/copilot/messages` — append the user turn now and resolve the
/// reply in the background.
///
/// Returns `202 Accepted` once the user turn is in the log, or
/// `204 No Content` for blank text. The reply is resolved on a spawned task
/// so a client disconnect cannot abandon it.
pub async fn submit_message(State(state): State<AppState>, Json(body): Json<SubmitBody>) -> Response {
    let Some(pending) = state.copilot.begin(&body.text).await else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let user_turn = pending.user_turn();
    tracing::debug!(user_turn, prompt_len = pending.prompt().len(), "copilot: reply dispatched");
    tokio::spawn(pending.resolve());
    (StatusCode::ACCEPTED, Json(SubmitResponse { user_turn })).into_response()
}
