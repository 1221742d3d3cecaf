//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)
//!
//! Nav entries reference icons by name in the config; `resolve` maps those
//! names onto glyphs with a neutral fallback for unknown names.

use navrail_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Resolve a config-named icon to a glyph.
    pub fn resolve(&self, name: &str) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match name {
                "home" => "\u{f015}",     // nf-fa-home
                "chart" => "\u{f080}",    // nf-fa-bar_chart
                "inbox" => "\u{f01c}",    // nf-fa-inbox
                "book" => "\u{f02d}",     // nf-fa-book
                "code" => "\u{f121}",     // nf-fa-code
                "compass" => "\u{f124}",  // nf-fa-location_arrow
                "folder" => "\u{f07b}",   // nf-fa-folder
                "bolt" => "\u{f0e7}",     // nf-fa-bolt
                "box" => "\u{f187}",      // nf-fa-archive
                "settings" => "\u{f013}", // nf-fa-gear
                "user" => "\u{f007}",     // nf-fa-user
                _ => "\u{f444}",          // nf-oct-dot_fill
            },
            IconMode::Unicode => match name {
                "home" => "\u{2302}",     // ⌂
                "chart" => "\u{2261}",    // ≡
                "inbox" => "\u{2709}",    // ✉
                "book" => "\u{25a4}",     // ▤
                "code" => "\u{276f}",     // ❯
                "compass" => "\u{25c8}",  // ◈
                "folder" => "\u{25b8}",   // ▸
                "bolt" => "\u{21af}",     // ↯
                "box" => "\u{25a2}",      // ▢
                "settings" => "\u{2699}", // ⚙
                "user" => "\u{263a}",     // ☺
                _ => "\u{2022}",          // •
            },
        }
    }

    // --- Sidebar chrome ---

    pub fn collapse(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0a8}", // nf-fa-arrow_circle_left
            IconMode::Unicode => "\u{00ab}",   // «
        }
    }

    pub fn expand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0a9}", // nf-fa-arrow_circle_right
            IconMode::Unicode => "\u{00bb}",   // »
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    /// Notification dot shown at the icon corner while collapsed
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}
