//! Fleet data model and sources.
//!
//! DESIGN
//! ======
//! `FleetState` is the unit of replacement: a load produces a whole new
//! value and the store swaps it in behind an `Arc`. Records are never
//! patched in place. The wire shape matches the fleet endpoint body
//! `{ "equipment": [...], "requests": [...] }`.

pub mod fallback;
pub mod source;

use serde::{Deserialize, Serialize};

/// Health scores strictly below this mark a machine as critical.
pub const CRITICAL_HEALTH_THRESHOLD: i64 = 40;

// =============================================================================
// RECORDS
// =============================================================================

/// One monitored machine.
///
/// Values are taken as delivered: `health` is nominally 0–100 and `status`
/// is free text that may disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "sn", alias = "serial")]
    pub serial: String,
    pub health: i64,
    pub status: String,
}

impl EquipmentRecord {
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.health < CRITICAL_HEALTH_THRESHOLD
    }
}

/// An outstanding service request. Linked to equipment only by free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: i64,
    pub title: String,
}

// =============================================================================
// FLEET STATE
// =============================================================================

/// Equipment and requests from a single load resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetState {
    pub equipment: Vec<EquipmentRecord>,
    pub requests: Vec<ServiceRequest>,
}

impl FleetState {
    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.equipment.iter().filter(|e| e.is_critical()).count()
    }
}

/// Where the live `FleetState` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleetOrigin {
    /// Nothing has been loaded yet; the state is empty.
    Unloaded,
    /// Decoded from the fleet endpoint.
    Live,
    /// The fixed synthetic dataset.
    Fallback,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
