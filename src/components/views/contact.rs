use super::{heading, paragraph};
use crate::app::state::{ContactState, Field, Focus};
use crate::components::field::FieldBox;
use crate::domain::profile::ProfileData;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Contact details and social links.
#[must_use]
pub fn info_lines(profile: &ProfileData, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Get In Touch", theme);
    out.extend(paragraph(
        "Have a project in mind or just want to say hello? Drop a message.",
        width,
        0,
        theme.text,
    ));
    out.push(Line::from(""));

    for (label, value) in [
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.location),
    ] {
        out.push(Line::from(Span::styled(label, theme.dimmed)));
        out.push(Line::from(Span::styled(value.clone(), theme.text)));
        out.push(Line::from(""));
    }

    if !profile.social.is_empty() {
        out.push(Line::from(Span::styled("Social", theme.heading)));
        for link in &profile.social {
            out.push(Line::from(vec![
                Span::styled(format!("{:<10}", link.name), theme.text),
                Span::styled(link.url.clone(), theme.link),
            ]));
        }
    }
    out
}

/// The three form fields and the send button.
pub struct ContactForm<'a, 'b> {
    pub theme: &'a Theme,
    pub state: &'a ContactState<'b>,
    pub focus: Focus,
    pub frame_count: u64,
}

impl Widget for ContactForm<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let fields = [
            (Field::ContactName, &self.state.name),
            (Field::ContactEmail, &self.state.email),
            (Field::ContactMessage, &self.state.message),
        ];
        for (i, (field, input)) in fields.into_iter().enumerate() {
            FieldBox {
                theme: self.theme,
                title: field.label(),
                input,
                focused: self.focus == Focus::Field(field),
            }
            .render(chunks[i], buf);
        }

        let button = if self.state.sending {
            let frame = glyphs::SPINNER[(self.frame_count as usize) % glyphs::SPINNER.len()];
            Span::styled(format!(" {frame} Sending... "), self.theme.chip)
        } else {
            Span::styled(" Send Message (s / ctrl+s) ", self.theme.chip_active)
        };
        Paragraph::new(Line::from(button)).render(chunks[3], buf);
    }
}
