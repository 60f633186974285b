//! Kill-switch for the assisted path.
//!
//! Replaces an ambient module-global flag with an explicit handle: the
//! process that constructs the generator owns the switch and decides who
//! may flip it. While engaged, assisted generation short-circuits to the
//! deterministic fallback without touching the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MaintenanceSwitch {
    engaged: Arc<AtomicBool>,
}

impl MaintenanceSwitch {
    pub fn new() -> Self {
        MaintenanceSwitch::default()
    }

    /// Suspend assisted generation.
    pub fn engage(&self) {
        self.engaged.store(true, Ordering::SeqCst);
        tracing::warn!("maintenance switch engaged, assisted generation suspended");
    }

    /// Resume assisted generation. A no-op unless the switch is engaged,
    /// so restore-before-engage cannot flip anything.
    ///
    /// Returns whether a restore actually happened.
    pub fn restore(&self) -> bool {
        let was_engaged = self
            .engaged
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if was_engaged {
            tracing::info!("maintenance switch restored, assisted generation resumed");
        }
        was_engaged
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::SeqCst)
    }
}
