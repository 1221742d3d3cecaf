//! Central message dispatch.

use std::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{keys, mouse, UpdateResult};

/// Main update function: process a message and return an optional
/// follow-up for the runner to feed back in.
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    update_at(state, msg, Instant::now())
}

/// Like [`update`] but with an explicit clock, so animation-sensitive
/// transitions are testable against a synthetic timeline.
pub fn update_at(state: &mut AppState, msg: Message, now: Instant) -> UpdateResult {
    match msg {
        Message::Key(key) => keys::handle_key(state, key),
        Message::Mouse(input) => mouse::handle_mouse(state, input, now),

        // Ticks only advance the frame clock; all tweens derive their
        // value from `now` at render time
        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.running = false;
            UpdateResult::none()
        }

        Message::ToggleCollapse => {
            state.toggle_collapse(now);
            UpdateResult::none()
        }
        Message::ToggleCategory(id) => {
            state.toggle_category(&id);
            UpdateResult::none()
        }
        Message::Navigate(route) => {
            state.navigate(&route);
            UpdateResult::none()
        }

        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrev => {
            state.select_prev();
            UpdateResult::none()
        }
        Message::ActivateSelection => keys::activate_selection(state),

        Message::OpenFlyout(id) => {
            state.flyout = Some(id);
            UpdateResult::none()
        }
        Message::CloseFlyout => {
            state.flyout = None;
            UpdateResult::none()
        }
    }
}
