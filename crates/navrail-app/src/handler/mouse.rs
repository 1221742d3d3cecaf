//! Pointer handling: hit-test against the regions registered at render
//! time, then translate into the same messages the keyboard produces.

use std::time::Instant;

use crate::hover::HitTarget;
use crate::message::{Message, MouseInput, MouseKind};
use crate::state::AppState;

use super::UpdateResult;

pub(super) fn handle_mouse(state: &mut AppState, mouse: MouseInput, now: Instant) -> UpdateResult {
    let target = state.hits.hit(mouse.column, mouse.row).cloned();

    match mouse.kind {
        MouseKind::Moved => {
            state.hover.update(target, now);
            UpdateResult::none()
        }
        MouseKind::Down => press(state, target),
    }
}

fn press(state: &mut AppState, target: Option<HitTarget>) -> UpdateResult {
    match target {
        Some(HitTarget::Entry(id)) | Some(HitTarget::FlyoutEntry(id)) => {
            match state.nav.entry(id) {
                Some(entry) => UpdateResult::message(Message::Navigate(entry.route.clone())),
                None => UpdateResult::none(),
            }
        }
        Some(HitTarget::Category(id)) => {
            if !state.collapsed() {
                UpdateResult::message(Message::ToggleCategory(id))
            } else if state.flyout.as_deref() == Some(id.as_str()) {
                UpdateResult::message(Message::CloseFlyout)
            } else {
                UpdateResult::message(Message::OpenFlyout(id))
            }
        }
        Some(HitTarget::CollapseToggle) => UpdateResult::message(Message::ToggleCollapse),
        // Click-away dismisses a pinned flyout
        None if state.flyout.is_some() => UpdateResult::message(Message::CloseFlyout),
        None => UpdateResult::none(),
    }
}
