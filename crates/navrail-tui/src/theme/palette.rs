//! Color palette for the sidebar theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const RAIL_BG: Color = Color::Black; // Sidebar rail background
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Tooltip/flyout backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Rail and content borders
pub const BORDER_POPUP: Color = Color::Gray; // Tooltip/flyout borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Active entry, toggle hint
pub const INDICATOR_BG: Color = Color::Rgb(30, 58, 78); // Morphing active highlight
pub const CURSOR_BG: Color = Color::Rgb(40, 40, 50); // Keyboard cursor row

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Badges ---
pub const BADGE_BG: Color = Color::Red;
pub const BADGE_FG: Color = Color::White;

// --- Profile card ---
pub const AVATAR_BG: Color = Color::Rgb(60, 60, 80);
pub const AVATAR_FG: Color = Color::White;
