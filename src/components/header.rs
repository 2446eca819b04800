use crate::domain::nav::{nav_item, SectionId};
use crate::domain::profile::Language;
use crate::theme::{glyphs, Theme, ThemeMode};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub theme: &'a Theme,
    pub name: &'a str,
    pub active: SectionId,
    pub mode: ThemeMode,
    pub language: Language,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let item = nav_item(self.active);
        let left = vec![
            Span::styled(format!(" {} {} ", glyphs::LOGO, self.name), self.theme.header_logo),
            Span::raw(" "),
            Span::styled(format!("{} {}", item.icon, item.label), self.theme.accent),
        ];

        // Right-aligned indicators
        let right = vec![
            Span::styled(
                format!(" {} {} ", self.mode.icon(), self.mode.label()),
                self.theme.footer_val,
            ),
            Span::styled(format!(" {} ", self.language.code()), self.theme.footer_key),
            Span::styled(" ctrl+k ", self.theme.footer_val),
        ];

        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let gap = (area.width as usize).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
