//! Screen layout definitions for the TUI
//!
//! The sidebar rail takes a fixed width (animated by the app layer) and
//! the content pane takes the rest.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Sidebar rail (collapsible)
    pub sidebar: Rect,

    /// Main content pane
    pub content: Rect,
}

/// Create the main screen layout for the given rail width.
///
/// `rail_width` is the animated width in cells; mid-transition it falls
/// between the collapsed and expanded widths.
pub fn create(area: Rect, rail_width: u16) -> ScreenAreas {
    let chunks =
        Layout::horizontal([Constraint::Length(rail_width), Constraint::Min(0)]).split(area);

    ScreenAreas {
        sidebar: chunks[0],
        content: chunks[1],
    }
}
