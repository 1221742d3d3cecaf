//! Hover tooltip shown next to the collapsed rail.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct Tooltip<'a> {
    text: &'a str,
}

impl<'a> Tooltip<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Size the popup needs, borders included.
    pub fn size(&self) -> (u16, u16) {
        (self.text.width() as u16 + 4, 3)
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);
        let block = styles::popup_block();
        let inner = block.inner(area);
        block.render(area, buf);
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            self.text,
            inner.width.saturating_sub(1) as usize,
            styles::text_primary(),
        );
    }
}
