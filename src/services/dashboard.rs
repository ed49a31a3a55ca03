//! Dashboard view model — what the equipment grid and request list show.
//!
//! Pure functions over a `FleetSnapshot`; selecting a view or opening the
//! co-pilot panel never touches fleet data.

use serde::{Deserialize, Serialize};

use crate::fleet::{EquipmentRecord, FleetOrigin, ServiceRequest};
use crate::state::{FleetSnapshot, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Equipment grid.
    #[default]
    Assets,
    /// Service request list.
    Requests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Critical,
    Nominal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentCard {
    pub id: i64,
    pub name: String,
    pub serial_label: String,
    pub health: i64,
    /// Health bar fill, clamped to 0–100.
    pub health_bar_pct: u8,
    pub status: String,
    pub badge: BadgeTone,
    /// Drives the warning indicator under the health bar.
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRow {
    pub id: i64,
    pub title: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub total_equipment: usize,
    pub total_requests: usize,
    pub critical_equipment: usize,
    pub origin: FleetOrigin,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewItems {
    Assets(Vec<EquipmentCard>),
    Requests(Vec<RequestRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub view: View,
    pub items: ViewItems,
    pub summary: FleetSummary,
    pub copilot_open: bool,
    pub ai_active: bool,
}

#[must_use]
pub fn equipment_card(record: &EquipmentRecord) -> EquipmentCard {
    let critical = record.is_critical();
    EquipmentCard {
        id: record.id,
        name: record.name.clone(),
        serial_label: format!("ID: {}", record.serial),
        health: record.health,
        health_bar_pct: u8::try_from(record.health.clamp(0, 100)).unwrap_or(0),
        status: record.status.clone(),
        badge: if critical { BadgeTone::Critical } else { BadgeTone::Nominal },
        critical,
    }
}

#[must_use]
pub fn request_row(request: &ServiceRequest) -> RequestRow {
    RequestRow {
        id: request.id,
        title: request.title.clone(),
        label: format!("SERVICE LOG #{}: {}", request.id, request.title),
    }
}

#[must_use]
pub fn summarize(snapshot: &FleetSnapshot) -> FleetSummary {
    FleetSummary {
        total_equipment: snapshot.state.equipment.len(),
        total_requests: snapshot.state.requests.len(),
        critical_equipment: snapshot.state.critical_count(),
        origin: snapshot.origin,
        generation: snapshot.generation,
    }
}

#[must_use]
pub fn build_dashboard(ui: UiState, snapshot: &FleetSnapshot, ai_active: bool) -> DashboardView {
    let items = match ui.view {
        View::Assets => ViewItems::Assets(snapshot.state.equipment.iter().map(equipment_card).collect()),
        View::Requests => ViewItems::Requests(snapshot.state.requests.iter().map(request_row).collect()),
    };
    DashboardView { view: ui.view, items, summary: summarize(snapshot), copilot_open: ui.copilot_open, ai_active }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
