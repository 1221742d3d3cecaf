//! Semantic style builders for the sidebar theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Sidebar row styles ---
pub fn entry_active() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn cursor_row() -> Style {
    Style::default().bg(palette::CURSOR_BG)
}

pub fn indicator() -> Style {
    Style::default().bg(palette::INDICATOR_BG)
}

pub fn badge() -> Style {
    Style::default()
        .fg(palette::BADGE_FG)
        .bg(palette::BADGE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn avatar() -> Style {
    Style::default()
        .fg(palette::AVATAR_FG)
        .bg(palette::AVATAR_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn rail_block() -> Block<'static> {
    Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette::BORDER_DIM))
        .style(Style::default().bg(palette::RAIL_BG))
}

pub fn content_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_DIM))
}

pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_POPUP))
        .style(Style::default().bg(palette::POPUP_BG))
}
