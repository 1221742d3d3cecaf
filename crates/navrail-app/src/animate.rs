//! Animation model: interpolation clocks for the shared indicator, the rail
//! width, and badge relocation.
//!
//! Animations here are purely presentational state derived from the
//! discrete logical state (collapsed, active entry); they are never the
//! source of truth. Every method takes the clock as an explicit `Instant`
//! so tests drive time synthetically. Rapid retargets coalesce: a tween
//! re-aims from its current rendered value rather than queuing.

use std::time::{Duration, Instant};

use navrail_core::nav::{BadgeAnchor, EntryId};

/// Ease-in-out cubic, the fixed interpolation curve for all transitions.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

// ─────────────────────────────────────────────────────────────────
// Scalar tween
// ─────────────────────────────────────────────────────────────────

/// A single interpolated scalar with an explicit duration.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    /// `None` when settled at `to`
    started: Option<Instant>,
    duration: Duration,
}

impl Tween {
    /// A tween already settled at `value`.
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration,
        }
    }

    /// A tween in flight from `from` to `to`, started at `now`.
    pub fn running(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: Some(now),
            duration,
        }
    }

    /// Progress in [0, 1] at `now` (time fraction, before easing).
    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                if self.duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Rendered value at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_in_out(t)
        }
    }

    /// Re-aim at a new target from the current rendered value.
    ///
    /// Mid-flight retargets continue from where the tween visually is, so
    /// two quick toggles retarget once rather than playing two animations.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if self.to == to {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started = Some(now);
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

// ─────────────────────────────────────────────────────────────────
// Indicator
// ─────────────────────────────────────────────────────────────────

/// Row geometry in cells, interpolated as floats while in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
        }
    }
}

#[derive(Debug, Clone)]
struct GeometryTween {
    from: Geometry,
    to: Geometry,
    started: Option<Instant>,
    duration: Duration,
}

impl GeometryTween {
    fn settled(at: Geometry, duration: Duration) -> Self {
        Self {
            from: at,
            to: at,
            started: None,
            duration,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                if self.duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    fn at(&self, now: Instant) -> Geometry {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, ease_in_out(t))
        }
    }

    fn retarget(&mut self, to: Geometry, now: Instant) {
        self.from = self.at(now);
        self.to = to;
        self.started = Some(now);
    }
}

/// The single shared highlight that travels between entries.
///
/// Owned by the entry list collectively, it tracks the active entry by its
/// stable [`EntryId`]: the same logical highlight keeps tracking the same
/// entry through a collapse/expand width change instead of a new highlight
/// appearing at the new width.
#[derive(Debug, Clone)]
pub struct IndicatorAnimator {
    duration: Duration,
    tracked: Option<(EntryId, GeometryTween)>,
}

impl IndicatorAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            tracked: None,
        }
    }

    /// Aim the highlight at an entry's measured geometry.
    ///
    /// - Same entry, same geometry: no-op.
    /// - Same entry, new geometry (collapse width change, list reflow):
    ///   transition while keeping identity.
    /// - Different entry: transition from the last rendered (possibly
    ///   mid-flight) geometry to the new one.
    /// - Previously hidden: appear at the target with no transition.
    pub fn retarget(&mut self, id: EntryId, target: Geometry, now: Instant) {
        match &mut self.tracked {
            Some((tracked_id, tween)) => {
                if *tracked_id == id && tween.to == target {
                    return;
                }
                tween.retarget(target, now);
                *tracked_id = id;
            }
            None => {
                self.tracked = Some((id, GeometryTween::settled(target, self.duration)));
            }
        }
    }

    /// Hide the highlight with no transition (no active entry, or the
    /// active entry cannot be measured right now).
    pub fn hide(&mut self) {
        self.tracked = None;
    }

    /// The entry currently tracked, independent of animation progress.
    pub fn tracked(&self) -> Option<EntryId> {
        self.tracked.as_ref().map(|(id, _)| *id)
    }

    /// Rendered geometry at `now`; `None` while hidden.
    pub fn geometry(&self, now: Instant) -> Option<Geometry> {
        self.tracked.as_ref().map(|(_, tween)| tween.at(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tracked
            .as_ref()
            .is_some_and(|(_, tween)| tween.progress(now) < 1.0)
    }
}

// ─────────────────────────────────────────────────────────────────
// Badge relocation
// ─────────────────────────────────────────────────────────────────

/// Moves one logical badge between its two anchor points.
///
/// The relocator stores a progress clock between the previous and current
/// anchor; the anchors' concrete x offsets are measured fresh at render
/// time, so the badge follows the rail while its width is itself animating.
#[derive(Debug, Clone)]
pub struct BadgeRelocator {
    anchor: BadgeAnchor,
    prev_anchor: BadgeAnchor,
    progress: Tween,
    duration: Duration,
}

impl BadgeRelocator {
    pub fn new(anchor: BadgeAnchor, duration: Duration) -> Self {
        Self {
            anchor,
            prev_anchor: anchor,
            progress: Tween::settled(1.0, duration),
            duration,
        }
    }

    /// Re-anchor the badge. Mid-flight changes reverse continuously.
    pub fn relocate(&mut self, anchor: BadgeAnchor, now: Instant) {
        if anchor == self.anchor {
            return;
        }
        let at = self.progress.value(now);
        self.prev_anchor = self.anchor;
        self.anchor = anchor;
        self.progress = Tween::running(1.0 - at, 1.0, now, self.duration);
    }

    pub fn anchor(&self) -> BadgeAnchor {
        self.anchor
    }

    /// Interpolated x offset given the measured offset of each anchor.
    pub fn x_offset(&self, icon_corner_x: f32, trailing_edge_x: f32, now: Instant) -> f32 {
        let measure = |anchor: BadgeAnchor| match anchor {
            BadgeAnchor::IconCorner => icon_corner_x,
            BadgeAnchor::TrailingEdge => trailing_edge_x,
        };
        let from = measure(self.prev_anchor);
        let to = measure(self.anchor);
        from + (to - from) * self.progress.value(now)
    }

    pub fn is_moving(&self, now: Instant) -> bool {
        !self.progress.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn id(n: usize) -> EntryId {
        // EntryIds are only handed out by NavTree; build one through it
        let tree = navrail_core::NavTree::new(
            (0..=n)
                .map(|i| {
                    navrail_core::NavItem::Entry(navrail_core::NavEntry::new(
                        format!("/r{}", i),
                        "home",
                        format!("R{}", i),
                    ))
                })
                .collect(),
        )
        .unwrap();
        tree.entry_id(n).unwrap()
    }

    #[test]
    fn test_tween_settled_holds_value() {
        let t0 = Instant::now();
        let tween = Tween::settled(10.0, ms(400));
        assert_eq!(tween.value(t0), 10.0);
        assert!(tween.is_settled(t0));
    }

    #[test]
    fn test_tween_reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(0.0, ms(400));
        tween.retarget(100.0, t0);

        assert!(!tween.is_settled(t0 + ms(200)));
        assert_eq!(tween.value(t0 + ms(400)), 100.0);
        assert!(tween.is_settled(t0 + ms(400)));
        assert_eq!(tween.value(t0 + ms(1000)), 100.0);
    }

    #[test]
    fn test_tween_midpoint_is_between_endpoints() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(0.0, ms(400));
        tween.retarget(100.0, t0);

        let mid = tween.value(t0 + ms(200));
        assert!(mid > 0.0 && mid < 100.0, "midpoint {} out of range", mid);
        // Ease-in-out is symmetric: halfway in time is halfway in value
        assert!((mid - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_tween_retarget_continues_from_rendered_value() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(0.0, ms(400));
        tween.retarget(100.0, t0);

        // Re-aim mid-flight; no jump back to 0 or ahead to 100
        let before = tween.value(t0 + ms(200));
        tween.retarget(0.0, t0 + ms(200));
        let after = tween.value(t0 + ms(200));
        assert!((before - after).abs() < f32::EPSILON);

        assert_eq!(tween.value(t0 + ms(600)), 0.0);
    }

    #[test]
    fn test_tween_retarget_same_target_keeps_settled() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(42.0, ms(400));
        tween.retarget(42.0, t0);
        assert!(tween.is_settled(t0));
    }

    #[test]
    fn test_indicator_appears_without_transition() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));
        assert!(indicator.geometry(t0).is_none());

        let target = Geometry::new(1.0, 5.0, 26.0, 1.0);
        indicator.retarget(id(0), target, t0);

        // From hidden there is no old geometry; appear settled at target
        assert_eq!(indicator.geometry(t0), Some(target));
        assert!(!indicator.is_animating(t0));
    }

    #[test]
    fn test_indicator_travels_between_entries() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));

        let home = Geometry::new(1.0, 2.0, 26.0, 1.0);
        let settings = Geometry::new(1.0, 8.0, 26.0, 1.0);
        indicator.retarget(id(0), home, t0);
        indicator.retarget(id(1), settings, t0);

        assert_eq!(indicator.tracked(), Some(id(1)));
        assert!(indicator.is_animating(t0 + ms(100)));

        let mid = indicator.geometry(t0 + ms(200)).unwrap();
        assert!(mid.y > 2.0 && mid.y < 8.0);

        assert_eq!(indicator.geometry(t0 + ms(400)), Some(settings));
    }

    #[test]
    fn test_indicator_same_entry_same_geometry_is_noop() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));
        let geom = Geometry::new(1.0, 2.0, 26.0, 1.0);

        indicator.retarget(id(0), geom, t0);
        indicator.retarget(id(0), geom, t0 + ms(50));
        assert!(!indicator.is_animating(t0 + ms(50)));
    }

    #[test]
    fn test_indicator_keeps_identity_through_width_change() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));

        let wide = Geometry::new(1.0, 2.0, 26.0, 1.0);
        let narrow = Geometry::new(1.0, 2.0, 6.0, 1.0);
        indicator.retarget(id(0), wide, t0);
        indicator.retarget(id(0), narrow, t0);

        // Same tracked entry, width animating
        assert_eq!(indicator.tracked(), Some(id(0)));
        assert!(indicator.is_animating(t0 + ms(100)));
        let mid = indicator.geometry(t0 + ms(200)).unwrap();
        assert!(mid.width < 26.0 && mid.width > 6.0);
    }

    #[test]
    fn test_indicator_coalesces_rapid_retargets() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));

        let a = Geometry::new(1.0, 2.0, 26.0, 1.0);
        let b = Geometry::new(1.0, 8.0, 26.0, 1.0);
        let c = Geometry::new(1.0, 14.0, 26.0, 1.0);
        indicator.retarget(id(0), a, t0);
        indicator.retarget(id(1), b, t0);
        // Second retarget before the first completes: re-aim mid-flight
        indicator.retarget(id(2), c, t0 + ms(100));

        assert_eq!(indicator.tracked(), Some(id(2)));
        // One animation toward the latest target, done one duration after
        // the second retarget, not two queued durations
        let done = indicator.geometry(t0 + ms(500)).unwrap();
        assert_eq!(done, c);
    }

    #[test]
    fn test_indicator_hides_without_transition() {
        let t0 = Instant::now();
        let mut indicator = IndicatorAnimator::new(ms(400));
        indicator.retarget(id(0), Geometry::new(1.0, 2.0, 26.0, 1.0), t0);

        indicator.hide();
        assert!(indicator.geometry(t0).is_none());
        assert!(indicator.tracked().is_none());

        // Reappearing after hide snaps to the new target
        let next = Geometry::new(1.0, 8.0, 26.0, 1.0);
        indicator.retarget(id(1), next, t0 + ms(50));
        assert_eq!(indicator.geometry(t0 + ms(50)), Some(next));
    }

    #[test]
    fn test_badge_relocates_between_anchors() {
        let t0 = Instant::now();
        let mut badge = BadgeRelocator::new(BadgeAnchor::TrailingEdge, ms(400));

        // Settled at the trailing edge
        assert_eq!(badge.x_offset(3.0, 24.0, t0), 24.0);

        badge.relocate(BadgeAnchor::IconCorner, t0);
        assert_eq!(badge.anchor(), BadgeAnchor::IconCorner);
        assert!(badge.is_moving(t0 + ms(100)));

        let mid = badge.x_offset(3.0, 24.0, t0 + ms(200));
        assert!(mid > 3.0 && mid < 24.0);

        assert_eq!(badge.x_offset(3.0, 24.0, t0 + ms(400)), 3.0);
        assert!(!badge.is_moving(t0 + ms(400)));
    }

    #[test]
    fn test_badge_mid_flight_reversal_is_continuous() {
        let t0 = Instant::now();
        let mut badge = BadgeRelocator::new(BadgeAnchor::TrailingEdge, ms(400));
        badge.relocate(BadgeAnchor::IconCorner, t0);

        let before = badge.x_offset(3.0, 24.0, t0 + ms(200));
        badge.relocate(BadgeAnchor::TrailingEdge, t0 + ms(200));
        let after = badge.x_offset(3.0, 24.0, t0 + ms(200));

        assert!((before - after).abs() < 0.5);
        assert_eq!(badge.x_offset(3.0, 24.0, t0 + ms(700)), 24.0);
    }

    #[test]
    fn test_badge_same_anchor_is_noop() {
        let t0 = Instant::now();
        let mut badge = BadgeRelocator::new(BadgeAnchor::IconCorner, ms(400));
        badge.relocate(BadgeAnchor::IconCorner, t0);
        assert!(!badge.is_moving(t0));
    }
}
