use crate::theme::{glyphs, Theme};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const LABEL: &str = " ↑ top ";

/// Bottom-right corner of the content area.
#[must_use]
pub fn badge_rect(body: Rect) -> Rect {
    let width = LABEL.width() as u16;
    if body.width < width + 2 || body.height < 2 {
        return Rect::default();
    }
    Rect::new(body.right() - width - 1, body.bottom() - 1, width, 1)
}

pub struct BackToTop<'a> {
    pub theme: &'a Theme,
}

impl Widget for BackToTop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = badge_rect(area);
        if rect.is_empty() {
            return;
        }
        buf.set_string(rect.x, rect.y, format!(" {} top ", glyphs::ARROW_UP), self.theme.badge);
    }
}
