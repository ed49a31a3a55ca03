//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the fleet-loading and co-pilot logic so route
//! handlers can stay focused on protocol translation.

pub mod copilot;
pub mod dashboard;
pub mod loader;
