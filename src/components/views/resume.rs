use super::{heading, paragraph};
use crate::domain::profile::{ProfileData, Skill};
use crate::theme::{glyphs, Theme};
use ratatui::text::{Line, Span};

const BAR_WIDTH: usize = 20;

fn skill_bar(skill: &Skill, theme: &Theme) -> Line<'static> {
    let filled = usize::from(skill.level.min(100)) * BAR_WIDTH / 100;
    Line::from(vec![
        Span::styled(format!("  {:<18}", skill.name), theme.text),
        Span::styled(glyphs::BAR_FULL.repeat(filled), theme.skill_bar),
        Span::styled(glyphs::BAR_EMPTY.repeat(BAR_WIDTH - filled), theme.skill_bar_empty),
        Span::styled(format!(" {:>3}%", skill.level), theme.dimmed),
    ])
}

#[must_use]
pub fn lines(profile: &ProfileData, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Experience", theme);
    for job in &profile.experience {
        out.push(Line::from(vec![
            Span::styled(job.role.clone(), theme.heading),
            Span::styled(format!("  @ {}", job.company), theme.accent),
        ]));
        out.push(Line::from(Span::styled(job.period.clone(), theme.dimmed)));
        out.extend(paragraph(&job.description, width, 0, theme.text));
        for achievement in &job.achievements {
            out.extend(paragraph(&format!("• {achievement}"), width, 2, theme.text));
        }
        out.push(Line::from(""));
    }

    out.extend(heading("Education", theme));
    for edu in &profile.education {
        out.push(Line::from(Span::styled(edu.degree.clone(), theme.heading)));
        out.push(Line::from(vec![
            Span::styled(edu.school.clone(), theme.accent),
            Span::styled(format!("  {}", edu.period), theme.dimmed),
        ]));
        out.extend(paragraph(&edu.description, width, 0, theme.text));
        out.push(Line::from(""));
    }

    if !profile.certifications.is_empty() {
        out.extend(heading("Certifications", theme));
        for cert in &profile.certifications {
            out.push(Line::from(vec![
                Span::styled(format!("{} ", glyphs::CHECK), theme.accent),
                Span::styled(cert.name.clone(), theme.text),
                Span::styled(format!("  {} · {}", cert.issuer, cert.date), theme.dimmed),
            ]));
        }
        out.push(Line::from(""));
    }

    out.extend(heading("Skills", theme));
    for category in &profile.skills {
        out.push(Line::from(Span::styled(category.category.clone(), theme.heading)));
        out.extend(category.items.iter().map(|s| skill_bar(s, theme)));
        out.push(Line::from(""));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_bar_fills_proportionally() {
        let theme = Theme::default();
        let line = skill_bar(
            &Skill {
                name: "Rust".into(),
                level: 50,
            },
            &theme,
        );
        let text = line.to_string();
        assert_eq!(text.matches(glyphs::BAR_FULL).count(), BAR_WIDTH / 2);
        assert_eq!(text.matches(glyphs::BAR_EMPTY).count(), BAR_WIDTH / 2);
        assert!(text.ends_with(" 50%"));
    }
}
