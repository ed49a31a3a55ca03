//! Co-pilot service — operator text + fleet snapshot → one LLM call → one reply turn.
//!
//! DESIGN
//! ======
//! `begin` does everything that must happen before the provider is called:
//! the blank-input check, the user turn, and the equipment snapshot. The
//! returned `PendingReply` owns the prompt and the log ticket; `resolve`
//! makes the single call and closes the exchange with either the provider's
//! text or the fixed failure message. A `PendingReply` dropped unresolved
//! closes its exchange with the failure message, so the log never waits on
//! an exchange that can no longer finish.
//!
//! Each prompt is self-contained: no earlier turns, no service requests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::conversation::{ConversationTurn, Ticket};
use crate::fleet::EquipmentRecord;
use crate::llm::LlmChat;
use crate::state::{ConversationStore, FleetStore};

/// Shown in place of a reply whenever the provider call fails for any reason.
pub const FAILURE_MESSAGE: &str = "AI Link Interrupted. Check your key quota or internet connection.";

/// How an exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    Answered,
    Failed,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct CopilotSession {
    log: ConversationStore,
    fleet: FleetStore,
    llm: Option<Arc<dyn LlmChat>>,
}

impl CopilotSession {
    #[must_use]
    pub fn new(log: ConversationStore, fleet: FleetStore, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { log, fleet, llm }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Run a whole exchange. Returns `None` for blank input, which appends
    /// nothing and calls nothing.
    pub async fn submit(&self, user_text: &str) -> Option<ReplyOutcome> {
        let pending = self.begin(user_text).await?;
        Some(pending.resolve().await)
    }

    /// Append the user turn and capture the prompt. Returns `None` for blank
    /// input.
    pub async fn begin(&self, user_text: &str) -> Option<PendingReply> {
        let text = user_text.trim();
        if text.is_empty() {
            return None;
        }

        let snapshot = self.fleet.snapshot().await;
        let prompt = build_prompt(&snapshot.state.equipment, text);
        let ticket = self.log.open_exchange(text);
        info!(
            exchange = ticket.sequence(),
            text_len = text.len(),
            equipment = snapshot.state.equipment.len(),
            fleet_generation = snapshot.generation,
            "copilot: user turn appended"
        );

        Some(PendingReply { log: self.log.clone(), llm: self.llm.clone(), prompt, ticket: Some(ticket) })
    }
}

// =============================================================================
// PENDING REPLY
// =============================================================================

/// An opened exchange waiting for its terminal turn.
pub struct PendingReply {
    log: ConversationStore,
    llm: Option<Arc<dyn LlmChat>>,
    prompt: String,
    ticket: Option<Ticket>,
}

impl PendingReply {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Log index of the user turn appended by `begin`.
    #[must_use]
    pub fn user_turn(&self) -> usize {
        self.ticket.as_ref().map_or(0, Ticket::user_turn)
    }

    /// Call the provider once and close the exchange.
    pub async fn resolve(mut self) -> ReplyOutcome {
        let exchange = self.ticket.as_ref().map_or(0, Ticket::sequence);

        let (turn, outcome) = match &self.llm {
            None => {
                warn!(exchange, "copilot: LLM not configured, replying with failure message");
                (ConversationTurn::assistant(FAILURE_MESSAGE), ReplyOutcome::Failed)
            }
            Some(llm) => match llm.generate(&self.prompt).await {
                Ok(generation) => {
                    info!(
                        exchange,
                        model = %generation.model,
                        input_tokens = generation.input_tokens,
                        output_tokens = generation.output_tokens,
                        "copilot: reply received"
                    );
                    (ConversationTurn::assistant(generation.text), ReplyOutcome::Answered)
                }
                Err(e) => {
                    warn!(exchange, kind = e.kind(), error = %e, "copilot: LLM call failed");
                    (ConversationTurn::assistant(FAILURE_MESSAGE), ReplyOutcome::Failed)
                }
            },
        };

        if let Some(ticket) = self.ticket.take() {
            self.log.close_exchange(ticket, turn);
        }
        outcome
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            warn!(exchange = ticket.sequence(), "copilot: reply abandoned before resolving");
            self.log
                .close_exchange(ticket, ConversationTurn::assistant(FAILURE_MESSAGE));
        }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

pub(crate) fn build_prompt(equipment: &[EquipmentRecord], user_text: &str) -> String {
    let assets = serde_json::to_string(equipment).unwrap_or_else(|_| "[]".into());
    format!("System Assets: {assets}. User Query: {user_text}. (Act as an industrial expert)")
}

#[cfg(test)]
#[path = "copilot_test.rs"]
mod tests;
