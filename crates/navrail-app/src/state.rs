//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::time::Instant;

use navrail_core::prelude::*;
use navrail_core::{BadgeAnchor, EntryId, NavCategory, NavItem, NavTree, Profile};

use crate::animate::{BadgeRelocator, IndicatorAnimator, Tween};
use crate::collapse::CollapseController;
use crate::config::{NavConfig, SidebarSettings};
use crate::disclosure::DisclosureController;
use crate::hover::{HitTarget, HoverState};
use crate::prefs::PersistedPreference;

/// One visible row in the sidebar list, in display order.
///
/// Children of open categories appear as `Entry` rows right after their
/// category header; the renderer indents them via
/// [`NavTree::parent_category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Entry(EntryId),
    Category(String),
    Separator { title: Option<String> },
}

impl Row {
    pub fn selectable(&self) -> bool {
        !matches!(self, Row::Separator { .. })
    }
}

/// A clickable/hoverable region registered during render.
#[derive(Debug, Clone)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub target: HitTarget,
}

/// Pointer hit-testing map, rebuilt on every render.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, x: u16, y: u16, width: u16, height: u16, target: HitTarget) {
        self.regions.push(HitRegion {
            x,
            y,
            width,
            height,
            target,
        });
    }

    /// Target under the pointer; overlays are registered last and win.
    pub fn hit(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|region| {
                column >= region.x
                    && column < region.x + region.width
                    && row >= region.y
                    && row < region.y + region.height
            })
            .map(|region| &region.target)
    }

    /// Registered region for a target (tooltip/flyout positioning).
    pub fn region_of(&self, target: &HitTarget) -> Option<&HitRegion> {
        self.regions.iter().find(|region| &region.target == target)
    }
}

/// The complete application model. One instance per mounted sidebar; no
/// state is shared across instances (the preference file is process-wide,
/// but it is only read at startup).
#[derive(Debug)]
pub struct AppState {
    pub running: bool,

    /// Static entry configuration, immutable at runtime
    pub nav: NavTree,
    pub profile: Option<Profile>,
    pub settings: SidebarSettings,

    pub collapse: CollapseController,
    pub disclosure: DisclosureController,

    /// Read-only "current path" from the host router's perspective;
    /// mutated only by link activation
    current_path: String,

    /// Keyboard cursor: index into `visible_rows()`
    pub cursor: usize,
    pub hover: HoverState,
    /// Keyboard-pinned flyout category (only meaningful while collapsed)
    pub flyout: Option<String>,

    // Presentation state derived from the logical state above; never the
    // source of truth
    pub indicator: IndicatorAnimator,
    pub rail_width: Tween,
    pub badges: HashMap<EntryId, BadgeRelocator>,

    /// Scroll offset of the link list (render info)
    pub list_scroll: u16,
    /// Clickable regions, rebuilt every render (render info)
    pub hits: HitMap,
}

impl AppState {
    pub fn new(config: NavConfig, prefs: PersistedPreference) -> Result<Self> {
        let nav = config.build_tree()?;
        let profile = config.profile();
        let settings = config.sidebar.clone();

        let collapse = CollapseController::initialize(prefs);
        let collapsed = collapse.collapsed();
        let disclosure = DisclosureController::new(collapsed);

        let width = Self::width_for(&settings, collapsed);
        let anchor = BadgeAnchor::for_collapsed(collapsed);
        let badges = nav
            .entries()
            .filter(|(_, entry)| entry.notifications > 0)
            .map(|(id, _)| (id, BadgeRelocator::new(anchor, settings.timing.badge())))
            .collect();

        Ok(Self {
            running: true,
            indicator: IndicatorAnimator::new(settings.timing.indicator()),
            rail_width: Tween::settled(f32::from(width), settings.timing.width()),
            nav,
            profile,
            settings,
            collapse,
            disclosure,
            current_path: "/".to_string(),
            cursor: 0,
            hover: HoverState::default(),
            flyout: None,
            badges,
            list_scroll: 0,
            hits: HitMap::default(),
        })
    }

    fn width_for(settings: &SidebarSettings, collapsed: bool) -> u16 {
        if collapsed {
            settings.collapsed_width
        } else {
            settings.expanded_width
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapse.collapsed()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The active entry, derived from the current path on demand.
    pub fn active_entry(&self) -> Option<EntryId> {
        self.nav.resolve_active(&self.current_path)
    }

    /// Rendered rail width in cells at `now`.
    pub fn rail_width_at(&self, now: Instant) -> u16 {
        self.rail_width.value(now).round().max(0.0) as u16
    }

    /// Link activation: update the current path; the host router would
    /// perform the actual navigation.
    pub fn navigate(&mut self, route: &str) {
        if self.current_path != route {
            debug!("Navigating: {} -> {}", self.current_path, route);
            self.current_path = route.to_string();
        }
        self.flyout = None;
    }

    /// Flip the collapse state and fan the change out to every observer:
    /// disclosures, rail width, badge anchors, flyout, cursor.
    pub fn toggle_collapse(&mut self, now: Instant) {
        let collapsed = self.collapse.toggle();
        self.disclosure.collapsed_changed(collapsed);

        let width = Self::width_for(&self.settings, collapsed);
        self.rail_width.retarget(f32::from(width), now);

        let anchor = BadgeAnchor::for_collapsed(collapsed);
        for relocator in self.badges.values_mut() {
            relocator.relocate(anchor, now);
        }

        if !collapsed {
            self.flyout = None;
        }
        self.clamp_cursor();
    }

    pub fn toggle_category(&mut self, id: &str) {
        self.disclosure.category_toggled(id);
        self.clamp_cursor();
    }

    // ─────────────────────────────────────────────────────────
    // Visible rows and keyboard cursor
    // ─────────────────────────────────────────────────────────

    /// The sidebar rows as currently disclosed, in display order.
    pub fn visible_rows(&self) -> Vec<Row> {
        let collapsed = self.collapsed();
        let mut rows = Vec::new();
        let mut next_entry = 0usize;

        for item in self.nav.items() {
            match item {
                NavItem::Entry(_) => {
                    if let Some(id) = self.nav.entry_id(next_entry) {
                        rows.push(Row::Entry(id));
                    }
                    next_entry += 1;
                }
                NavItem::Category(category) => {
                    rows.push(Row::Category(category.id.clone()));
                    let disclosed = !collapsed && self.disclosure.is_open(&category.id);
                    for offset in 0..category.children.len() {
                        if disclosed {
                            if let Some(id) = self.nav.entry_id(next_entry + offset) {
                                rows.push(Row::Entry(id));
                            }
                        }
                    }
                    next_entry += category.children.len();
                }
                NavItem::Separator { title } => {
                    rows.push(Row::Separator {
                        title: title.clone(),
                    });
                }
            }
        }

        rows
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.visible_rows().get(self.cursor).cloned()
    }

    pub fn select_next(&mut self) {
        let rows = self.visible_rows();
        let mut index = self.cursor;
        while index + 1 < rows.len() {
            index += 1;
            if rows[index].selectable() {
                self.cursor = index;
                return;
            }
        }
    }

    pub fn select_prev(&mut self) {
        let rows = self.visible_rows();
        let mut index = self.cursor;
        while index > 0 {
            index -= 1;
            if rows
                .get(index)
                .map(Row::selectable)
                .unwrap_or(false)
            {
                self.cursor = index;
                return;
            }
        }
    }

    pub fn select_first(&mut self) {
        let rows = self.visible_rows();
        if let Some(found) = rows.iter().position(Row::selectable) {
            self.cursor = found;
        }
    }

    pub fn select_last(&mut self) {
        let rows = self.visible_rows();
        if let Some(found) = rows.iter().rposition(Row::selectable) {
            self.cursor = found;
        }
    }

    /// Keep the cursor on a selectable row after the row list changed
    /// (collapse closed a disclosed category, a category was toggled).
    fn clamp_cursor(&mut self) {
        let rows = self.visible_rows();
        if rows.is_empty() {
            self.cursor = 0;
            return;
        }

        let max = rows.len() - 1;
        if self.cursor > max {
            self.cursor = max;
        }
        if rows[self.cursor].selectable() {
            return;
        }
        // Nearest selectable: forward first, then backward
        if let Some(found) = (self.cursor..rows.len()).find(|&i| rows[i].selectable()) {
            self.cursor = found;
        } else if let Some(found) = (0..self.cursor).rev().find(|&i| rows[i].selectable()) {
            self.cursor = found;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Tooltip / flyout policy
    // ─────────────────────────────────────────────────────────

    /// Tooltip to show at `now`, if any.
    ///
    /// Tooltips are suppressed entirely while expanded (the label is
    /// already visible) and appear only after the hover-intent delay.
    pub fn tooltip(&self, now: Instant) -> Option<(HitTarget, String)> {
        if !self.collapsed() {
            return None;
        }
        let delay = self.settings.timing.tooltip_delay();
        if !self.hover.intent_reached(delay, now) {
            return None;
        }

        match self.hover.target()? {
            HitTarget::Entry(id) => {
                let label = self.nav.entry(*id)?.label.clone();
                Some((HitTarget::Entry(*id), label))
            }
            HitTarget::CollapseToggle => {
                Some((HitTarget::CollapseToggle, "Expand sidebar".to_string()))
            }
            // Categories get a flyout, flyout children already show labels
            HitTarget::Category(_) | HitTarget::FlyoutEntry(_) => None,
        }
    }

    /// Flyout to show at `now`: a pinned one (keyboard), or a hovered
    /// category header once intent is reached. Collapsed only.
    pub fn flyout_category(&self, now: Instant) -> Option<&NavCategory> {
        if !self.collapsed() {
            return None;
        }

        if let Some(id) = &self.flyout {
            return self.nav.category(id);
        }

        let delay = self.settings.timing.tooltip_delay();
        match self.hover.target() {
            Some(HitTarget::Category(id)) if self.hover.intent_reached(delay, now) => {
                self.nav.category(id)
            }
            // Keep the flyout open while the pointer is inside it
            Some(HitTarget::FlyoutEntry(id)) => self.nav.parent_category(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;

    fn state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PersistedPreference::new(dir.path());
        AppState::new(NavConfig::default(), prefs).unwrap()
    }

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_new_state_defaults() {
        let state = state();
        assert!(state.running);
        assert!(!state.collapsed());
        assert_eq!(state.current_path(), "/");
        // Root entry is active at "/"
        let active = state.active_entry().unwrap();
        assert_eq!(state.nav.entry(active).unwrap().route, "/");
    }

    #[test]
    fn test_badges_created_for_notified_entries_only() {
        let state = state();
        let notified: Vec<EntryId> = state
            .nav
            .entries()
            .filter(|(_, e)| e.notifications > 0)
            .map(|(id, _)| id)
            .collect();
        assert!(!notified.is_empty());
        assert_eq!(state.badges.len(), notified.len());
        for id in notified {
            assert!(state.badges.contains_key(&id));
        }
    }

    #[test]
    fn test_visible_rows_hide_closed_category_children() {
        let mut state = state();
        let closed_rows = state.visible_rows();
        assert!(closed_rows
            .iter()
            .all(|row| !matches!(row, Row::Entry(id) if state.nav.parent_category(*id).is_some())));

        state.toggle_category("docs");
        let open_rows = state.visible_rows();
        let docs_children = state.nav.category_children("docs");
        for child in docs_children {
            assert!(open_rows.contains(&Row::Entry(child)));
        }
    }

    #[test]
    fn test_collapse_hides_children_and_expand_restores() {
        let mut state = state();
        state.toggle_category("docs");
        let open_len = state.visible_rows().len();

        state.toggle_collapse(now());
        assert!(state.collapsed());
        let collapsed_len = state.visible_rows().len();
        assert!(collapsed_len < open_len);

        state.toggle_collapse(now());
        assert_eq!(state.visible_rows().len(), open_len);
        assert!(state.disclosure.is_open("docs"));
    }

    #[test]
    fn test_rail_width_tweens_toward_collapsed_width() {
        let mut state = state();
        let t0 = now();
        assert_eq!(state.rail_width_at(t0), state.settings.expanded_width);

        state.toggle_collapse(t0);
        let settle = t0 + state.settings.timing.width() + std::time::Duration::from_millis(1);
        assert_eq!(state.rail_width_at(settle), state.settings.collapsed_width);
    }

    #[test]
    fn test_navigate_updates_active_entry() {
        let mut state = state();
        state.navigate("/settings/profile");
        let active = state.active_entry().unwrap();
        assert_eq!(state.nav.entry(active).unwrap().route, "/settings");
    }

    #[test]
    fn test_navigate_to_unknown_path_has_no_active_entry() {
        let mut state = state();
        state.navigate("/nowhere");
        assert!(state.active_entry().is_none());
    }

    #[test]
    fn test_cursor_skips_separators() {
        let mut state = state();
        let rows = state.visible_rows();

        // Walk the cursor across the whole list; it must never rest on a
        // separator
        for _ in 0..rows.len() {
            state.select_next();
            let row = state.selected_row().unwrap();
            assert!(row.selectable(), "cursor landed on {:?}", row);
        }
        for _ in 0..rows.len() {
            state.select_prev();
            assert!(state.selected_row().unwrap().selectable());
        }
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_clamped_when_category_closes() {
        let mut state = state();
        state.toggle_category("docs");
        // Move cursor onto the last docs child
        let rows = state.visible_rows();
        let last_child = state.nav.category_children("docs").pop().unwrap();
        state.cursor = rows
            .iter()
            .position(|row| row == &Row::Entry(last_child))
            .unwrap();

        state.toggle_category("docs");
        assert!(state.selected_row().unwrap().selectable());
    }

    #[test]
    fn test_tooltip_suppressed_while_expanded() {
        let mut state = state();
        let t0 = now();
        let (id, _) = state.nav.entries().next().unwrap();
        state.hover.update(Some(HitTarget::Entry(id)), t0);

        let later = t0 + state.settings.timing.tooltip_delay();
        assert!(state.tooltip(later).is_none());
    }

    #[test]
    fn test_tooltip_requires_hover_intent_while_collapsed() {
        let mut state = state();
        let t0 = now();
        state.toggle_collapse(t0);

        let (id, entry) = state
            .nav
            .entries()
            .map(|(id, e)| (id, e.clone()))
            .next()
            .unwrap();
        state.hover.update(Some(HitTarget::Entry(id)), t0);

        assert!(state.tooltip(t0).is_none());
        let later = t0 + state.settings.timing.tooltip_delay();
        let (_, text) = state.tooltip(later).unwrap();
        assert_eq!(text, entry.label);
    }

    #[test]
    fn test_toggle_tooltip_text() {
        let mut state = state();
        let t0 = now();
        state.toggle_collapse(t0);
        state.hover.update(Some(HitTarget::CollapseToggle), t0);

        let later = t0 + state.settings.timing.tooltip_delay();
        let (_, text) = state.tooltip(later).unwrap();
        assert_eq!(text, "Expand sidebar");
    }

    #[test]
    fn test_flyout_from_hovered_category_while_collapsed() {
        let mut state = state();
        let t0 = now();
        state.toggle_collapse(t0);
        state
            .hover
            .update(Some(HitTarget::Category("docs".to_string())), t0);

        assert!(state.flyout_category(t0).is_none());
        let later = t0 + state.settings.timing.tooltip_delay();
        assert_eq!(state.flyout_category(later).unwrap().id, "docs");
    }

    #[test]
    fn test_flyout_never_shows_while_expanded() {
        let mut state = state();
        let t0 = now();
        state.flyout = Some("docs".to_string());
        assert!(state.flyout_category(t0).is_none());
    }

    #[test]
    fn test_pinned_flyout_shows_without_hover() {
        let mut state = state();
        let t0 = now();
        state.toggle_collapse(t0);
        state.flyout = Some("docs".to_string());
        assert_eq!(state.flyout_category(t0).unwrap().id, "docs");
    }

    #[test]
    fn test_hit_map_last_region_wins() {
        let mut hits = HitMap::default();
        hits.push(0, 0, 10, 10, HitTarget::CollapseToggle);
        hits.push(2, 2, 4, 4, HitTarget::Category("docs".to_string()));

        assert_eq!(hits.hit(1, 1), Some(&HitTarget::CollapseToggle));
        assert_eq!(
            hits.hit(3, 3),
            Some(&HitTarget::Category("docs".to_string()))
        );
        assert_eq!(hits.hit(50, 50), None);
    }
}
