//! Disclosure state for nested categories.

use navrail_core::prelude::*;

/// Tracks which categories are open, with a shadow set that preserves the
/// pre-collapse open set across collapse/expand cycles.
///
/// Invariants:
/// - While collapsed, the live open set is empty.
/// - The shadow is written only by a collapse transition, never by a
///   category toggle, so expand -> collapse -> expand with no edits in
///   between restores the open set verbatim.
#[derive(Debug, Clone, Default)]
pub struct DisclosureController {
    /// Live open set; insertion order is preserved for restore
    open: Vec<String>,
    /// Open set snapshotted at the last collapse
    shadow: Vec<String>,
    collapsed: bool,
}

impl DisclosureController {
    pub fn new(collapsed: bool) -> Self {
        Self {
            open: Vec::new(),
            shadow: Vec::new(),
            collapsed,
        }
    }

    /// React to the rail collapsing or expanding.
    pub fn collapsed_changed(&mut self, collapsed: bool) {
        if collapsed == self.collapsed {
            return;
        }
        self.collapsed = collapsed;

        if collapsed {
            self.shadow = std::mem::take(&mut self.open);
            trace!("Disclosures closed, shadow = {:?}", self.shadow);
        } else {
            // Shadow left untouched: repeated cycles are idempotent
            self.open = self.shadow.clone();
            trace!("Disclosures restored: {:?}", self.open);
        }
    }

    /// Flip a category's membership in the open set.
    ///
    /// No-op while collapsed: a collapsed category is not independently
    /// disclosable (it shows a flyout on hover instead).
    pub fn category_toggled(&mut self, id: &str) {
        if self.collapsed {
            trace!("Category toggle ignored while collapsed: {}", id);
            return;
        }

        if let Some(pos) = self.open.iter().position(|open_id| open_id == id) {
            self.open.remove(pos);
        } else {
            self.open.push(id.to_string());
        }
    }

    /// Whether a category renders open right now.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open_id| open_id == id)
    }

    /// The live open set in insertion order.
    pub fn open_set(&self) -> &[String] {
        &self.open
    }

    #[cfg(test)]
    pub(crate) fn shadow_set(&self) -> &[String] {
        &self.shadow
    }
}
