//! Keyboard handling: raw keys to messages.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Row};

use super::UpdateResult;

pub(super) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => UpdateResult::message(Message::Quit),

        InputKey::Tab | InputKey::Char('b') => UpdateResult::message(Message::ToggleCollapse),

        InputKey::Up | InputKey::Char('k') => UpdateResult::message(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => UpdateResult::message(Message::SelectNext),
        InputKey::Home => {
            state.select_first();
            UpdateResult::none()
        }
        InputKey::End => {
            state.select_last();
            UpdateResult::none()
        }

        InputKey::Enter => UpdateResult::message(Message::ActivateSelection),
        InputKey::Esc if state.flyout.is_some() => UpdateResult::message(Message::CloseFlyout),

        InputKey::Esc | InputKey::Char(_) | InputKey::CharCtrl(_) => UpdateResult::none(),
    }
}

/// Activate the row under the keyboard cursor. Entries navigate;
/// categories toggle their disclosure, or while collapsed toggle their
/// flyout instead.
pub(super) fn activate_selection(state: &mut AppState) -> UpdateResult {
    match state.selected_row() {
        Some(Row::Entry(id)) => match state.nav.entry(id) {
            Some(entry) => UpdateResult::message(Message::Navigate(entry.route.clone())),
            None => UpdateResult::none(),
        },
        Some(Row::Category(id)) => {
            if !state.collapsed() {
                UpdateResult::message(Message::ToggleCategory(id))
            } else if state.flyout.as_deref() == Some(id.as_str()) {
                UpdateResult::message(Message::CloseFlyout)
            } else {
                UpdateResult::message(Message::OpenFlyout(id))
            }
        }
        _ => UpdateResult::none(),
    }
}
