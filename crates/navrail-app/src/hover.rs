//! Hover tracking with intent delay.
//!
//! Tooltips and flyouts only appear after the pointer has rested on a
//! target for a fixed delay, so fast movement across the icon rail does
//! not flicker transient UI.

use std::time::{Duration, Instant};

use navrail_core::nav::EntryId;

/// What the pointer is over (also the click-target vocabulary for the
/// hit map built at render time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Entry(EntryId),
    Category(String),
    CollapseToggle,
    /// A child row inside an open category flyout
    FlyoutEntry(EntryId),
}

/// Current hover target and how long the pointer has rested on it.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    target: Option<HitTarget>,
    since: Option<Instant>,
}

impl HoverState {
    /// Update from a pointer move. `since` only resets when the target
    /// actually changes.
    pub fn update(&mut self, target: Option<HitTarget>, now: Instant) {
        if self.target == target {
            return;
        }
        self.since = target.is_some().then_some(now);
        self.target = target;
    }

    pub fn target(&self) -> Option<&HitTarget> {
        self.target.as_ref()
    }

    /// Whether the pointer has rested on the current target long enough.
    pub fn intent_reached(&self, delay: Duration, now: Instant) -> bool {
        match (self.target.as_ref(), self.since) {
            (Some(_), Some(since)) => now.saturating_duration_since(since) >= delay,
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.target = None;
        self.since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_no_target_no_intent() {
        let hover = HoverState::default();
        assert!(!hover.intent_reached(DELAY, Instant::now()));
    }

    #[test]
    fn test_intent_reached_after_delay() {
        let t0 = Instant::now();
        let mut hover = HoverState::default();
        hover.update(Some(HitTarget::CollapseToggle), t0);

        assert!(!hover.intent_reached(DELAY, t0));
        assert!(!hover.intent_reached(DELAY, t0 + Duration::from_millis(499)));
        assert!(hover.intent_reached(DELAY, t0 + Duration::from_millis(500)));
    }

    #[test]
    fn test_moving_between_targets_resets_intent() {
        let t0 = Instant::now();
        let mut hover = HoverState::default();
        hover.update(Some(HitTarget::CollapseToggle), t0);

        // Pointer moves to another target just before the delay elapses
        let t1 = t0 + Duration::from_millis(400);
        hover.update(Some(HitTarget::Category("docs".to_string())), t1);

        assert!(!hover.intent_reached(DELAY, t0 + Duration::from_millis(600)));
        assert!(hover.intent_reached(DELAY, t1 + Duration::from_millis(500)));
    }

    #[test]
    fn test_resting_on_same_target_does_not_reset() {
        let t0 = Instant::now();
        let mut hover = HoverState::default();
        hover.update(Some(HitTarget::CollapseToggle), t0);
        // Repeated move events over the same target
        hover.update(Some(HitTarget::CollapseToggle), t0 + Duration::from_millis(300));

        assert!(hover.intent_reached(DELAY, t0 + Duration::from_millis(500)));
    }

    #[test]
    fn test_leaving_clears_intent() {
        let t0 = Instant::now();
        let mut hover = HoverState::default();
        hover.update(Some(HitTarget::CollapseToggle), t0);
        hover.update(None, t0 + Duration::from_millis(600));

        assert!(hover.target().is_none());
        assert!(!hover.intent_reached(DELAY, t0 + Duration::from_millis(1200)));
    }
}
