use crate::domain::profile::{Language, ProfileData};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Profile card: avatar initial, identity, stats and the quick actions.
pub struct Sidebar<'a> {
    pub theme: &'a Theme,
    pub profile: &'a ProfileData,
    pub language: Language,
    pub copied: bool,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let profile = self.profile;
        let dict = profile.translations.dictionary(self.language);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("   {}   ", profile.initial()),
                theme.header_logo,
            )),
            Line::from(""),
            Line::from(Span::styled(profile.name.clone(), theme.title)),
            Line::from(Span::styled(profile.title.clone(), theme.dimmed)),
            Line::from(""),
            Line::from(Span::styled(format!("● {}", profile.availability), theme.accent)),
            Line::from(""),
        ];

        for stat in &profile.stats {
            let label = profile.translations.localize(&stat.label, self.language);
            lines.push(Line::from(vec![
                Span::styled(format!("{:>4} ", stat.value), theme.heading),
                Span::styled(label.to_string(), theme.text),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(profile.email.clone(), theme.link)));
        lines.push(Line::from(Span::styled(profile.phone.clone(), theme.dimmed)));
        lines.push(Line::from(Span::styled(profile.location.clone(), theme.dimmed)));
        lines.push(Line::from(""));

        let copy_style = if self.copied { theme.chip_active } else { theme.chip };
        lines.push(Line::from(vec![
            Span::styled(" c ", theme.footer_key),
            Span::styled(format!(" {} ", dict.copy_email), copy_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" l ", theme.footer_key),
            Span::styled(
                format!(" {} / {} ", Language::En.code(), Language::Ar.code()),
                theme.chip,
            ),
            Span::styled(format!(" {}", self.language.code()), theme.accent),
        ]));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .style(theme.base);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
