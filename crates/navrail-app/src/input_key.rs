//! Terminal-agnostic key representation.
//!
//! The TUI layer converts backend key events into this enum so the update
//! logic stays testable without a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    Up,
    Down,
    Home,
    End,
}
