//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use navrail_app::hover::HitTarget;
use navrail_app::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Rendering is where geometry gets measured: the sidebar retargets the
/// active indicator against the rows it just laid out and rebuilds the
/// pointer hit map. Overlays are registered last so they win hit-testing.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    view_at(frame, state, Instant::now());
}

/// Like [`view`] but with an explicit clock for animation tests.
pub fn view_at(frame: &mut Frame, state: &mut AppState, now: Instant) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.rail_width_at(now));
    let icons = IconSet::new(state.settings.icons);

    state.hits.clear();
    frame.render_stateful_widget(widgets::Sidebar::new(icons, now), areas.sidebar, state);

    render_content(frame, state, areas.content);

    if let Some(category) = state.flyout_category(now).cloned() {
        render_flyout(frame, state, &category, &areas, icons);
    } else if let Some((target, text)) = state.tooltip(now) {
        render_tooltip(frame, state, &target, &text, &areas);
    }
}

/// Placeholder content pane showing where the host application's routed
/// content would go.
fn render_content(frame: &mut Frame, state: &AppState, area: Rect) {
    let active_label = state
        .active_entry()
        .and_then(|id| state.nav.entry(id))
        .map(|entry| entry.label.as_str());

    let block = styles::content_block().title(format!(" {} ", state.current_path()));
    let body = match active_label {
        Some(label) => Line::from(vec![
            Span::styled("Active: ", styles::text_muted()),
            Span::styled(label.to_string(), styles::accent_bold()),
        ]),
        None => Line::from(Span::styled("No entry matches this path", styles::text_muted())),
    };
    let hints = Line::from(Span::styled(
        "j/k move   Enter open   Tab collapse   q quit",
        styles::text_muted(),
    ));

    let paragraph = Paragraph::new(vec![body, Line::default(), hints]).block(block);
    frame.render_widget(paragraph, area);
}

fn render_flyout(
    frame: &mut Frame,
    state: &mut AppState,
    category: &navrail_core::nav::NavCategory,
    areas: &layout::ScreenAreas,
    icons: IconSet,
) {
    let children: Vec<_> = state
        .nav
        .category_children(&category.id)
        .into_iter()
        .filter_map(|id| state.nav.entry(id).cloned().map(|entry| (id, entry)))
        .collect();
    if children.is_empty() {
        return;
    }

    let flyout = widgets::Flyout::new(category, &children, state.active_entry(), icons);
    let (width, height) = flyout.size();

    let anchor_y = state
        .hits
        .region_of(&HitTarget::Category(category.id.clone()))
        .map(|region| region.y)
        .unwrap_or(areas.sidebar.y + 2);
    let popup = popup_rect(frame.area(), areas.sidebar, anchor_y, width, height);

    frame.render_widget(flyout, popup);
    for (index, (id, _)) in children.iter().enumerate() {
        let row = widgets::Flyout::child_row(popup, index);
        state
            .hits
            .push(row.x, row.y, row.width, row.height, HitTarget::FlyoutEntry(*id));
    }
}

fn render_tooltip(
    frame: &mut Frame,
    state: &AppState,
    target: &HitTarget,
    text: &str,
    areas: &layout::ScreenAreas,
) {
    let anchor_y = state
        .hits
        .region_of(target)
        .map(|region| region.y)
        .unwrap_or(areas.sidebar.y);

    let tooltip = widgets::Tooltip::new(text);
    let (width, height) = tooltip.size();
    let popup = popup_rect(frame.area(), areas.sidebar, anchor_y, width, height);
    frame.render_widget(tooltip, popup);
}

/// Popup placement: right of the rail, vertically centered on the anchor
/// row, clamped to the screen.
fn popup_rect(screen: Rect, sidebar: Rect, anchor_y: u16, width: u16, height: u16) -> Rect {
    let x = sidebar.right().min(screen.right().saturating_sub(width));
    let y = anchor_y
        .saturating_sub(height / 2)
        .min(screen.bottom().saturating_sub(height));
    Rect::new(x, y, width, height).intersection(screen)
}
