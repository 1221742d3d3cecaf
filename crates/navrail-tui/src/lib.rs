//! navrail-tui - Terminal UI for navrail
//!
//! This crate provides the ratatui-based terminal interface: terminal setup,
//! event polling, the sidebar widget family, and the render loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
