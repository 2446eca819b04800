use crate::domain::nav::{SectionId, NAV_ITEMS};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};

fn tab_label(index: usize) -> String {
    let item = &NAV_ITEMS[index];
    format!(" {} {} {} ", index + 1, item.icon, item.label)
}

/// Screen rect of each tab inside the strip's border. Tabs that do not fit
/// get an empty rect.
#[must_use]
pub fn tab_rects(area: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let mut x = inner.x;
    (0..NAV_ITEMS.len())
        .map(|i| {
            let width = Span::raw(tab_label(i)).width() as u16;
            let rect = Rect::new(x, inner.y, width, inner.height.min(1)).intersection(inner);
            x = x.saturating_add(width + 1);
            rect
        })
        .collect()
}

pub struct Tabs<'a> {
    pub theme: &'a Theme,
    pub active: SectionId,
    /// Keyboard focus inside the strip, when the strip has it.
    pub focused: Option<usize>,
}

impl Widget for Tabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused.is_some() {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .render(area, buf);

        for (i, rect) in tab_rects(area).into_iter().enumerate() {
            if rect.is_empty() {
                continue;
            }
            let style = if self.focused == Some(i) {
                self.theme.tab_focus
            } else if NAV_ITEMS[i].id == self.active {
                self.theme.tab_active
            } else {
                self.theme.tab_inactive
            };
            buf.set_string(rect.x, rect.y, tab_label(i), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_rects_are_ordered_and_disjoint() {
        let rects = tab_rects(Rect::new(0, 0, 120, 3));
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0].x, 1);
        assert_eq!(rects[0].y, 1);
        for pair in rects.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
    }

    #[test]
    fn test_tab_rects_clip_when_narrow() {
        let rects = tab_rects(Rect::new(0, 0, 20, 3));
        assert!(!rects[0].is_empty());
        assert!(rects[4].is_empty());
    }
}
