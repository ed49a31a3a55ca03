//! Append-only co-pilot conversation log.
//!
//! DESIGN
//! ======
//! A user turn is appended together with a `Ticket`. The terminal turn for
//! that exchange is handed back with the ticket and parked until every
//! earlier ticket has committed, so terminal turns appear in call order
//! even when replies resolve out of order. Nothing is ever removed or
//! edited once it is in `turns`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Greeting shown before the operator has said anything.
pub const GREETING: &str = "GearGuard AI is active. How can I help with your fleet?";

// =============================================================================
// TURNS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into() }
    }
}

/// Reservation for the terminal turn of one exchange. Not `Clone`: each
/// ticket commits exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    sequence: u64,
    user_turn: usize,
}

impl Ticket {
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Log index of the user turn that opened this exchange.
    #[must_use]
    pub fn user_turn(&self) -> usize {
        self.user_turn
    }
}

// =============================================================================
// LOG
// =============================================================================

#[derive(Debug)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
    next_ticket: u64,
    next_commit: u64,
    parked: BTreeMap<u64, ConversationTurn>,
}

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(GREETING)],
            next_ticket: 0,
            next_commit: 0,
            parked: BTreeMap::new(),
        }
    }

    /// Append a user turn and reserve the slot for its reply.
    pub fn open_exchange(&mut self, text: impl Into<String>) -> Ticket {
        self.turns.push(ConversationTurn::user(text));
        let ticket = Ticket { sequence: self.next_ticket, user_turn: self.turns.len() - 1 };
        self.next_ticket += 1;
        ticket
    }

    /// Hand in the terminal turn for `ticket`. Returns how many turns were
    /// appended by this call (zero while an earlier exchange is still open).
    pub fn close_exchange(&mut self, ticket: Ticket, turn: ConversationTurn) -> usize {
        self.parked.insert(ticket.sequence, turn);
        let mut appended = 0;
        while let Some(turn) = self.parked.remove(&self.next_commit) {
            self.turns.push(turn);
            self.next_commit += 1;
            appended += 1;
        }
        appended
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Exchanges whose terminal turn is not yet visible.
    #[must_use]
    pub fn open_exchanges(&self) -> u64 {
        self.next_ticket - self.next_commit
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
