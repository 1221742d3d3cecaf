//! Category flyout shown next to the collapsed rail.
//!
//! Lists a category's children with labels and badge counts so a collapsed
//! category is still fully reachable by pointer.

use navrail_core::nav::{badge_label, EntryId, NavCategory, NavEntry};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

pub struct Flyout<'a> {
    category: &'a NavCategory,
    children: &'a [(EntryId, NavEntry)],
    active: Option<EntryId>,
    icons: IconSet,
}

impl<'a> Flyout<'a> {
    pub fn new(
        category: &'a NavCategory,
        children: &'a [(EntryId, NavEntry)],
        active: Option<EntryId>,
        icons: IconSet,
    ) -> Self {
        Self {
            category,
            children,
            active,
            icons,
        }
    }

    /// Size the popup needs, borders included.
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .children
            .iter()
            .map(|(_, entry)| entry.label.width())
            .chain([self.category.title.width()])
            .max()
            .unwrap_or(0) as u16;
        // icon + gap + label + gap + badge
        (widest + 12, self.children.len() as u16 + 2)
    }

    /// Inner row rect of child `index` within the popup `area`, for hit
    /// registration by the caller.
    pub fn child_row(area: Rect, index: usize) -> Rect {
        Rect::new(
            area.x + 1,
            area.y + 1 + index as u16,
            area.width.saturating_sub(2),
            1,
        )
    }
}

impl Widget for Flyout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);
        let block = styles::popup_block().title(format!(" {} ", self.category.title));
        let inner = block.inner(area);
        block.render(area, buf);

        for (index, (id, entry)) in self.children.iter().enumerate() {
            let row = Self::child_row(area, index).intersection(inner);
            if row.height == 0 {
                continue;
            }

            let style = if self.active == Some(*id) {
                styles::entry_active()
            } else {
                styles::text_secondary()
            };
            buf.set_string(row.x + 1, row.y, self.icons.resolve(&entry.icon), style);

            let label_x = row.x + 3;
            let badge_reserve = badge_label(entry.notifications)
                .map(|text| text.len() as u16 + 3)
                .unwrap_or(0);
            let available = row.right().saturating_sub(label_x + badge_reserve);
            buf.set_stringn(label_x, row.y, &entry.label, available as usize, style);

            if let Some(text) = badge_label(entry.notifications) {
                let badge_x = row.right().saturating_sub(text.len() as u16 + 2);
                if badge_x > label_x {
                    buf.set_string(badge_x, row.y, format!(" {} ", text), styles::badge());
                }
            }
        }
    }
}
