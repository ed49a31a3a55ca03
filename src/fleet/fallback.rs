//! Fixed synthetic fleet shown when the fleet endpoint is unreachable.

use super::{EquipmentRecord, FleetState, ServiceRequest};

/// Build the fallback dataset. Always returns the same value.
#[must_use]
pub fn fallback_fleet() -> FleetState {
    FleetState {
        equipment: vec![
            equipment(1, "CNC Milling X1", "SN-GGP-01", 94, "Operational"),
            equipment(2, "3D Printer V4", "SN-GGP-02", 28, "Critical"),
            equipment(3, "Lathe Pro", "SN-GGP-03", 65, "Maintenance Req"),
        ],
        requests: vec![ServiceRequest { id: 1, title: "Check hydraulic seal on SN-003".into() }],
    }
}

fn equipment(id: i64, name: &str, serial: &str, health: i64, status: &str) -> EquipmentRecord {
    EquipmentRecord { id, name: name.into(), serial: serial.into(), health, status: status.into() }
}
