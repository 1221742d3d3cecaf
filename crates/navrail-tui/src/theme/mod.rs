//! Centralized theme system for the sidebar TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Nerd Font glyph lookup with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
