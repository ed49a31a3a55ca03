//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds two single-writer stores: `FleetStore` (written only by the
//! fleet loader) and `ConversationStore` (written only by the co-pilot
//! session), plus the presentation-only `UiState`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::RwLock;

use crate::conversation::{ConversationLog, ConversationTurn, Ticket};
use crate::fleet::source::FleetSource;
use crate::fleet::{FleetOrigin, FleetState};
use crate::llm::LlmChat;
use crate::services::copilot::CopilotSession;
use crate::services::dashboard::View;
use crate::services::loader::FleetLoader;

// =============================================================================
// FLEET STORE
// =============================================================================

/// The live fleet plus the resolution it came from.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub state: Arc<FleetState>,
    pub origin: FleetOrigin,
    /// Generation of the load that produced `state`; 0 before any load.
    pub generation: u64,
}

/// Single live `FleetState` slot, replaced by whole-value swap.
#[derive(Clone)]
pub struct FleetStore {
    live: Arc<RwLock<FleetSnapshot>>,
    issued: Arc<AtomicU64>,
}

impl FleetStore {
    #[must_use]
    pub fn new() -> Self {
        let empty = FleetSnapshot { state: Arc::new(FleetState::default()), origin: FleetOrigin::Unloaded, generation: 0 };
        Self { live: Arc::new(RwLock::new(empty)), issued: Arc::new(AtomicU64::new(0)) }
    }

    pub async fn snapshot(&self) -> FleetSnapshot {
        self.live.read().await.clone()
    }

    /// Reserve the next load generation.
    pub(crate) fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install `state` if `generation` is still the most recent one issued.
    /// Returns `false` when the resolution is stale and was discarded.
    pub(crate) async fn apply(&self, generation: u64, state: Arc<FleetState>, origin: FleetOrigin) -> bool {
        let mut live = self.live.write().await;
        if generation != self.issued.load(Ordering::SeqCst) || generation <= live.generation {
            return false;
        }
        *live = FleetSnapshot { state, origin, generation };
        true
    }
}

impl Default for FleetStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// CONVERSATION STORE
// =============================================================================

/// Shared handle to the conversation log. The mutex is never held across an
/// `.await`.
#[derive(Clone, Default)]
pub struct ConversationStore {
    log: Arc<Mutex<ConversationLog>>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.lock().turns().to_vec()
    }

    pub(crate) fn open_exchange(&self, text: &str) -> Ticket {
        self.lock().open_exchange(text)
    }

    pub(crate) fn close_exchange(&self, ticket: Ticket, turn: ConversationTurn) -> usize {
        let mut log = self.lock();
        let appended = log.close_exchange(ticket, turn);
        tracing::debug!(appended, open = log.open_exchanges(), "copilot: exchange closed");
        appended
    }

    // Every mutation is a single push; poisoning leaves the log consistent.
    fn lock(&self) -> MutexGuard<'_, ConversationLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// UI STATE
// =============================================================================

/// Presentation-only state toggled by operator actions. Never touches data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub view: View,
    pub copilot_open: bool,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub fleet: FleetStore,
    pub conversation: ConversationStore,
    pub ui: Arc<RwLock<UiState>>,
    pub loader: Arc<FleetLoader>,
    pub copilot: Arc<CopilotSession>,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn FleetSource>, llm: Option<Arc<dyn LlmChat>>) -> Self {
        let fleet = FleetStore::new();
        let conversation = ConversationStore::new();
        let loader = Arc::new(FleetLoader::new(source, fleet.clone()));
        let copilot = Arc::new(CopilotSession::new(conversation.clone(), fleet.clone(), llm));
        Self { fleet, conversation, ui: Arc::new(RwLock::new(UiState::default())), loader, copilot }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
