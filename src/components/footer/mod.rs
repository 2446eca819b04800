mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = Span::styled(
            format!("  {}  ", state.nav.active.fragment()),
            theme.footer_key,
        );
        let copyright = Span::styled(
            format!(" © {} {} ", Local::now().year(), state.profile.name),
            theme.dimmed,
        );

        let mut spans = vec![status_span, Span::raw(" ")];

        let available_width = (area.width as usize).saturating_sub(4 + copyright.width());
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            if group.items.is_empty() {
                continue;
            }

            let first_item = &group.items[0];
            let first_item_width = Span::raw(first_item.key).width() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key = Span::raw(format!(" {} ", item.key));
                let desc = Span::raw(format!(" {} ", item.desc));
                let item_width = key.width() + desc.width();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (theme.accent, theme.accent.add_modifier(Modifier::DIM))
                } else {
                    (theme.footer_key, theme.footer_val)
                };

                spans.push(key.style(key_style));
                spans.push(desc.style(val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        let gap = (area.width as usize).saturating_sub(current_width + copyright.width());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(copyright);

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
