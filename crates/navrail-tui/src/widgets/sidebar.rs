//! The collapsible sidebar rail.
//!
//! Renders header, nav rows, separators, and the profile footer. This is
//! where presentation state gets written back: the morphing indicator is
//! retargeted to the active row's measured geometry, the list scroll
//! follows the cursor, and every interactive region is registered in the
//! hit map for pointer handling.

use std::time::Instant;

use navrail_app::hover::HitTarget;
use navrail_app::state::{AppState, HitMap, Row};
use navrail_app::{BadgeRelocator, Geometry};
use navrail_core::nav::{badge_label, BadgeAnchor, NavEntry, NavTree};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};

use crate::theme::{icons::IconSet, palette, styles};

/// Rows reserved above the nav list (title row + blank)
const HEADER_ROWS: u16 = 2;
/// Rows reserved below the nav list (rule + avatar/name + email)
const FOOTER_ROWS: u16 = 3;

pub struct Sidebar {
    icons: IconSet,
    now: Instant,
}

impl Sidebar {
    pub fn new(icons: IconSet, now: Instant) -> Self {
        Self { icons, now }
    }
}

impl StatefulWidget for Sidebar {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut AppState) {
        let block = styles::rail_block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height <= HEADER_ROWS {
            return;
        }

        let now = self.now;
        let icons = self.icons;
        let collapsed = state.collapsed();
        let rows = state.visible_rows();
        let active = state.active_entry();
        let cursor = state.cursor;

        // Disjoint field borrows: rows below mutate hits/indicator/scroll
        // while reading the nav tree
        let AppState {
            nav,
            profile,
            disclosure,
            hits,
            indicator,
            badges,
            list_scroll,
            ..
        } = state;

        render_header(buf, inner, icons, collapsed, hits);

        let footer = profile
            .as_ref()
            .filter(|_| inner.height > HEADER_ROWS + FOOTER_ROWS + 1);
        let footer_rows = if footer.is_some() { FOOTER_ROWS } else { 0 };
        let list = Rect {
            x: inner.x,
            y: inner.y + HEADER_ROWS,
            width: inner.width,
            height: inner.height - HEADER_ROWS - footer_rows,
        };

        // Keep the cursor row inside the viewport
        let viewport = list.height as usize;
        let mut scroll = *list_scroll as usize;
        if cursor < scroll {
            scroll = cursor;
        }
        if viewport > 0 && cursor >= scroll + viewport {
            scroll = cursor + 1 - viewport;
        }
        *list_scroll = scroll as u16;

        // Retarget the indicator against the active row's measured
        // geometry; hide it when the active entry is not a visible row
        let active_row = active.and_then(|id| {
            rows.iter()
                .position(|row| row == &Row::Entry(id))
                .filter(|idx| (scroll..scroll + viewport).contains(idx))
                .map(|idx| (id, list.y + (idx - scroll) as u16))
        });
        match active_row {
            Some((id, y)) => indicator.retarget(
                id,
                Geometry::new(
                    f32::from(list.x),
                    f32::from(y),
                    f32::from(list.width),
                    1.0,
                ),
                now,
            ),
            None => indicator.hide(),
        }
        if let Some(geometry) = indicator.geometry(now) {
            let highlight = Rect::new(
                geometry.x.round() as u16,
                geometry.y.round() as u16,
                geometry.width.round().max(1.0) as u16,
                1,
            )
            .intersection(list);
            buf.set_style(highlight, styles::indicator());
        }

        for (idx, row) in rows.iter().enumerate().skip(scroll).take(viewport) {
            let y = list.y + (idx - scroll) as u16;
            let row_area = Rect::new(list.x, y, list.width, 1);
            if idx == cursor && active_row.map(|(_, ay)| ay) != Some(y) {
                buf.set_style(row_area, styles::cursor_row());
            }

            match row {
                Row::Entry(id) => {
                    if let Some(entry) = nav.entry(*id) {
                        let indent = if nav.parent_category(*id).is_some() { 2 } else { 0 };
                        render_entry_row(
                            buf,
                            row_area,
                            entry,
                            indent,
                            collapsed,
                            active == Some(*id),
                            icons,
                            badges.get(id),
                            now,
                        );
                        hits.push(row_area.x, y, row_area.width, 1, HitTarget::Entry(*id));
                    }
                }
                Row::Category(id) => {
                    render_category_row(buf, row_area, nav, id, collapsed, disclosure.is_open(id), icons);
                    hits.push(row_area.x, y, row_area.width, 1, HitTarget::Category(id.clone()));
                }
                Row::Separator { title } => {
                    render_separator_row(buf, row_area, title.as_deref(), collapsed);
                }
            }
        }

        if let Some(profile) = footer {
            render_footer(buf, inner, profile, collapsed);
        }
    }
}

fn render_header(buf: &mut Buffer, inner: Rect, icons: IconSet, collapsed: bool, hits: &mut HitMap) {
    let toggle = if collapsed { icons.expand() } else { icons.collapse() };

    if collapsed {
        let x = inner.x + inner.width / 2;
        buf.set_string(x, inner.y, toggle, styles::accent());
        hits.push(inner.x, inner.y, inner.width, 1, HitTarget::CollapseToggle);
    } else {
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            "navrail",
            inner.width.saturating_sub(4) as usize,
            styles::accent_bold(),
        );
        let x = inner.x + inner.width.saturating_sub(2);
        buf.set_string(x, inner.y, toggle, styles::accent());
        hits.push(x.saturating_sub(1), inner.y, 3, 1, HitTarget::CollapseToggle);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_entry_row(
    buf: &mut Buffer,
    area: Rect,
    entry: &NavEntry,
    indent: u16,
    collapsed: bool,
    active: bool,
    icons: IconSet,
    badge: Option<&BadgeRelocator>,
    now: Instant,
) {
    let icon_x = area.x + indent + 1;
    if icon_x >= area.right() {
        return;
    }

    let style = if active {
        styles::entry_active()
    } else {
        styles::text_secondary()
    };
    buf.set_string(icon_x, area.y, icons.resolve(&entry.icon), style);

    let label_x = icon_x + 2;
    if !collapsed && label_x < area.right() {
        let badge_reserve = badge_label(entry.notifications)
            .map(|text| text.len() as u16 + 3)
            .unwrap_or(0);
        let available = area.right().saturating_sub(label_x + badge_reserve);
        buf.set_stringn(label_x, area.y, &entry.label, available as usize, style);
    }

    let (Some(text), Some(relocator)) = (badge_label(entry.notifications), badge) else {
        return;
    };

    // Both anchor positions are measured fresh every frame so the badge
    // tracks the animating rail width
    let icon_corner_x = f32::from(icon_x + 1);
    let trailing_edge_x = f32::from(area.right().saturating_sub(text.len() as u16 + 2));
    let x = relocator
        .x_offset(icon_corner_x, trailing_edge_x, now)
        .round() as u16;

    if relocator.anchor() == BadgeAnchor::IconCorner && !relocator.is_moving(now) {
        if x < area.right() {
            let dot = ratatui::style::Style::default().fg(palette::BADGE_BG);
            buf.set_string(x, area.y, icons.dot(), dot);
        }
    } else if x < area.right() {
        let width = area.right().saturating_sub(x) as usize;
        buf.set_stringn(x, area.y, format!(" {} ", text), width, styles::badge());
    }
}

fn render_category_row(
    buf: &mut Buffer,
    area: Rect,
    nav: &NavTree,
    id: &str,
    collapsed: bool,
    open: bool,
    icons: IconSet,
) {
    let Some(category) = nav.category(id) else {
        return;
    };

    let icon_x = area.x + 1;
    if icon_x >= area.right() {
        return;
    }
    buf.set_string(icon_x, area.y, icons.resolve(&category.icon), styles::text_secondary());

    if collapsed {
        return;
    }

    let title_x = icon_x + 2;
    if title_x < area.right() {
        let available = area.right().saturating_sub(title_x + 2);
        buf.set_stringn(
            title_x,
            area.y,
            &category.title,
            available as usize,
            styles::text_primary(),
        );
    }

    let chevron = if open { icons.chevron_down() } else { icons.chevron_right() };
    let chevron_x = area.right().saturating_sub(2);
    if chevron_x > title_x {
        buf.set_string(chevron_x, area.y, chevron, styles::text_muted());
    }
}

fn render_separator_row(buf: &mut Buffer, area: Rect, title: Option<&str>, collapsed: bool) {
    let rule = "\u{2500}".repeat(area.width as usize);
    buf.set_string(area.x, area.y, rule, styles::text_muted());

    // Titles hide with the labels while collapsed
    if let (Some(title), false) = (title, collapsed) {
        let text = format!(" {} ", title);
        let available = area.width.saturating_sub(2) as usize;
        buf.set_stringn(area.x + 1, area.y, text, available, styles::text_muted());
    }
}

fn render_footer(buf: &mut Buffer, inner: Rect, profile: &navrail_core::nav::Profile, collapsed: bool) {
    let rule_y = inner.bottom() - FOOTER_ROWS;
    let rule = "\u{2500}".repeat(inner.width as usize);
    buf.set_string(inner.x, rule_y, rule, styles::text_muted());

    let y = rule_y + 1;
    let avatar = format!(" {} ", profile.initials());
    buf.set_stringn(inner.x + 1, y, &avatar, inner.width.saturating_sub(1) as usize, styles::avatar());

    if !collapsed {
        let name_x = inner.x + 1 + avatar.len() as u16 + 1;
        if name_x < inner.right() {
            let available = inner.right().saturating_sub(name_x) as usize;
            buf.set_stringn(name_x, y, &profile.name, available, styles::text_primary());
        }
        let email_x = inner.x + 1;
        let available = inner.right().saturating_sub(email_x) as usize;
        buf.set_stringn(email_x, y + 1, &profile.email, available, styles::text_muted());
    }
}
