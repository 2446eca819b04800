use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A titled text field. Only the focused field shows the editor and its
/// cursor; the rest render their text, or the placeholder when empty.
pub struct FieldBox<'a, 'b> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub input: &'a AppTextArea<'b>,
    pub focused: bool,
}

impl Widget for FieldBox<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, style) = if self.focused {
            (self.theme.border_focus, self.theme.input_focus)
        } else {
            (self.theme.border, self.theme.input)
        };
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.title), self.theme.dimmed))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.focused {
            Widget::render(self.input, inner, buf);
        } else if self.input.is_blank() {
            Paragraph::new(Span::styled(
                self.input.placeholder_text().to_string(),
                self.theme.dimmed,
            ))
            .render(inner, buf);
        } else {
            let lines: Vec<Line> = self
                .input
                .lines()
                .iter()
                .map(|l| Line::from(l.as_str()))
                .collect();
            Paragraph::new(lines).style(style).render(inner, buf);
        }
    }
}
