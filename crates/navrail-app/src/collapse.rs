//! Collapse state for the rail.

use navrail_core::prelude::*;

use crate::prefs::PersistedPreference;

/// Owns the live collapsed/expanded boolean, seeded once from the persisted
/// preference at startup. `toggle()` is the only mutation path; every new
/// value is written through best-effort.
#[derive(Debug, Clone)]
pub struct CollapseController {
    collapsed: bool,
    prefs: PersistedPreference,
}

impl CollapseController {
    /// Read the persisted preference once and seed the live state from it.
    pub fn initialize(prefs: PersistedPreference) -> Self {
        let collapsed = prefs.load_collapsed();
        debug!("Collapse state initialized: collapsed={}", collapsed);
        Self { collapsed, prefs }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the collapse state and write it through.
    ///
    /// The in-memory state always updates; a failed write is logged and
    /// dropped (persistence is best-effort, spec'd non-fatal).
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;

        if let Err(e) = self.prefs.store_collapsed(self.collapsed) {
            warn!("Failed to persist collapse preference: {}", e);
        }

        debug!("Collapse toggled: collapsed={}", self.collapsed);
        self.collapsed
    }
}
