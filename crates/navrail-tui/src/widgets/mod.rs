//! Custom widget components

mod flyout;
mod sidebar;
mod tooltip;

pub use flyout::Flyout;
pub use sidebar::Sidebar;
pub use tooltip::Tooltip;

// Re-export state types from app layer (these are used by render/)
pub use navrail_app::state::{AppState, HitMap, Row};
