use super::{heading, paragraph};
use crate::domain::profile::ProfileData;
use crate::theme::Theme;
use ratatui::text::{Line, Span};

#[must_use]
pub fn lines(profile: &ProfileData, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("About Me", theme);
    out.extend(paragraph(&profile.tagline, width, 0, theme.text));
    out.push(Line::from(""));

    out.extend(heading("What I Do", theme));
    for service in &profile.services {
        out.push(Line::from(Span::styled(format!("▸ {}", service.title), theme.heading)));
        out.extend(paragraph(&service.description, width, 2, theme.text));
        out.push(Line::from(""));
    }

    if !profile.testimonials.is_empty() {
        out.extend(heading("Testimonials", theme));
        for t in &profile.testimonials {
            out.extend(paragraph(&format!("\u{201c}{}\u{201d}", t.quote), width, 2, theme.text));
            out.push(Line::from(vec![
                Span::styled(format!("  - {}", t.author), theme.accent),
                Span::styled(format!(", {}", t.role), theme.dimmed),
            ]));
            out.push(Line::from(""));
        }
    }

    if !profile.clients.is_empty() {
        out.extend(heading("Clients", theme));
        out.extend(paragraph(&profile.clients.join("  ·  "), width, 0, theme.dimmed));
    }
    out
}
