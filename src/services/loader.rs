//! Fleet loader — fetch live fleet state, degrade to the fallback dataset.
//!
//! DESIGN
//! ======
//! `load` never fails. A source error is logged and replaced by the fixed
//! fallback fleet, so the dashboard always has something to render. Each
//! call reserves a generation before reading; when the read resolves the
//! result is installed only if no later load has been issued since.
//! Overlapping refreshes are not cancelled, their stale results are dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::fleet::fallback::fallback_fleet;
use crate::fleet::source::FleetSource;
use crate::fleet::{FleetOrigin, FleetState};
use crate::state::FleetStore;

/// What one `load` call produced and whether it became the live state.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub state: Arc<FleetState>,
    pub origin: FleetOrigin,
    pub generation: u64,
    /// `false` when a newer load was issued before this one resolved.
    pub applied: bool,
}

pub struct FleetLoader {
    source: Arc<dyn FleetSource>,
    store: FleetStore,
}

impl FleetLoader {
    #[must_use]
    pub fn new(source: Arc<dyn FleetSource>, store: FleetStore) -> Self {
        Self { source, store }
    }

    pub async fn load(&self) -> LoadOutcome {
        let generation = self.store.issue();
        debug!(generation, "fleet: load issued");

        let (state, origin) = match self.source.fetch().await {
            Ok(state) => {
                info!(
                    generation,
                    equipment = state.equipment.len(),
                    requests = state.requests.len(),
                    "fleet: live data received"
                );
                (state, FleetOrigin::Live)
            }
            Err(e) => {
                warn!(generation, error = %e, "fleet: endpoint unavailable, showing fallback dataset");
                (fallback_fleet(), FleetOrigin::Fallback)
            }
        };

        let state = Arc::new(state);
        let applied = self.store.apply(generation, Arc::clone(&state), origin).await;
        if applied {
            info!(generation, ?origin, "fleet: load applied");
        } else {
            debug!(generation, ?origin, "fleet: stale load discarded");
        }

        LoadOutcome { state, origin, generation, applied }
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
