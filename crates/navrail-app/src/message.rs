//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Pointer event kinds the sidebar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    /// Pointer motion (drives hover: tooltips, flyouts)
    Moved,
    /// Left button press
    Down,
}

/// Pointer event in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub kind: MouseKind,
    pub column: u16,
    pub row: u16,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer event from terminal
    Mouse(MouseInput),

    /// Tick event for the animation frame clock
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Sidebar Messages
    // ─────────────────────────────────────────────────────────
    /// Flip the collapse state (persisted best-effort)
    ToggleCollapse,
    /// Flip a category's disclosure (no-op while collapsed)
    ToggleCategory(String),
    /// Navigate to a route; the active entry is re-derived
    Navigate(String),

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move the keyboard cursor to the next selectable row
    SelectNext,
    /// Move the keyboard cursor to the previous selectable row
    SelectPrev,
    /// Activate the row under the keyboard cursor
    ActivateSelection,

    // ─────────────────────────────────────────────────────────
    // Flyout Messages
    // ─────────────────────────────────────────────────────────
    /// Pin a collapsed category's flyout open (keyboard trigger)
    OpenFlyout(String),
    /// Dismiss the pinned flyout
    CloseFlyout,
}
