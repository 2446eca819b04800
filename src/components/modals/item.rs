use crate::domain::profile::{BlogPost, Project};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, dim_area, draw_drop_shadow};
use crate::components::views::paragraph;

#[must_use]
pub fn item_modal_rect(area: Rect) -> Rect {
    centered_rect(70, 80, area)
}

/// What the modal is showing.
pub enum ItemContent<'a> {
    Project(&'a Project),
    Post(&'a BlogPost),
}

pub struct ItemModal<'a> {
    pub theme: &'a Theme,
    pub content: ItemContent<'a>,
    pub scroll: u16,
}

impl ItemModal<'_> {
    fn lines(&self, width: u16) -> (String, Vec<Line<'static>>) {
        let theme = self.theme;
        match self.content {
            ItemContent::Project(project) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", project.category), theme.badge),
                        if project.featured {
                            Span::styled(format!("  {} Featured", glyphs::STAR), theme.featured)
                        } else {
                            Span::raw("")
                        },
                    ]),
                    Line::from(""),
                ];
                lines.extend(paragraph(&project.description, width, 0, theme.text));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Technologies", theme.heading)));
                let chips: Vec<Span> = project
                    .technologies
                    .iter()
                    .flat_map(|t| [Span::styled(format!(" {t} "), theme.chip), Span::raw(" ")])
                    .collect();
                lines.push(Line::from(chips));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Link: ", theme.dimmed),
                    Span::styled(project.link.clone(), theme.link),
                ]));
                (project.title.clone(), lines)
            }
            ItemContent::Post(post) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", post.category), theme.badge),
                        Span::styled(
                            format!("  {}  ·  {}", post.date, post.read_time),
                            theme.dimmed,
                        ),
                    ]),
                    Line::from(""),
                ];
                lines.extend(paragraph(&post.content, width, 0, theme.text));
                lines.push(Line::from(""));
                let tags: Vec<Span> = post
                    .tags
                    .iter()
                    .flat_map(|t| [Span::styled(format!("#{t}"), theme.accent), Span::raw(" ")])
                    .collect();
                lines.push(Line::from(tags));
                (post.title.clone(), lines)
            }
        }
    }

    fn block_inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(item_modal_rect(area))
    }

    /// Largest useful scroll offset for the modal drawn over `area`.
    #[must_use]
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = Self::block_inner(area);
        let (_, lines) = self.lines(inner.width);
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height)
    }
}

impl Widget for ItemModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = item_modal_rect(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        dim_area(buf, area);
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let (title, lines) = self.lines(Self::block_inner(area).width);
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {title} "), self.theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("j/k", self.theme.footer_key),
                Span::styled(" scroll ", self.theme.footer_val),
                Span::styled("esc", self.theme.footer_key),
                Span::styled(" close ", self.theme.footer_val),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.base);

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(block)
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileData;

    #[test]
    fn test_long_post_can_scroll() {
        let theme = Theme::default();
        let profile = ProfileData::builtin();
        let post = &profile.blog[0];
        let modal = ItemModal {
            theme: &theme,
            content: ItemContent::Post(post),
            scroll: 0,
        };
        let small = modal.max_scroll(Rect::new(0, 0, 40, 10));
        let large = modal.max_scroll(Rect::new(0, 0, 200, 200));
        assert!(small > 0);
        assert_eq!(large, 0);
    }
}
