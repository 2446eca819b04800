use crate::app::state::{Toast, ToastKind};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const TOAST_HEIGHT: u16 = 3;

/// Stack of notifications in the top-right corner of `area`, newest last.
pub struct Toasts<'a> {
    pub theme: &'a Theme,
    pub items: &'a [Toast],
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for toast in self.items {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let (icon, style) = match toast.kind {
                ToastKind::Success => (glyphs::CHECK, self.theme.toast_success),
                ToastKind::Error => (glyphs::ALERT, self.theme.toast_error),
            };
            let text = format!(" {icon} {} ", toast.message);
            let width = (Span::raw(text.as_str()).width() as u16 + 2).min(area.width);
            let rect = Rect::new(area.right().saturating_sub(width), y, width, TOAST_HEIGHT);

            Clear.render(rect, buf);
            Paragraph::new(Line::from(Span::styled(text, style)))
                .block(
                    Block::default()
                        .title_bottom(
                            Line::from(toast.created_at.format(" %H:%M ").to_string())
                                .style(self.theme.dimmed),
                        )
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style),
                )
                .render(rect, buf);
            y += TOAST_HEIGHT;
        }
    }
}
