use super::{chips, paragraph};
use crate::app::state::PortfolioState;
use crate::domain::catalog::featured_projects;
use crate::domain::profile::Project;
use crate::theme::{glyphs, Theme};
use ratatui::text::{Line, Span};

fn project_card(
    project: &Project,
    selected: bool,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let marker = if selected { glyphs::ARROW_RIGHT } else { " " };
    let title_style = if selected { theme.list_selected } else { theme.heading };
    let mut out = vec![Line::from(vec![
        Span::styled(format!("{marker} "), theme.accent),
        Span::styled(project.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(format!(" {} ", project.category), theme.badge),
    ])];
    out.extend(paragraph(&project.description, width, 2, theme.dimmed));
    out.push(Line::from(Span::styled(
        format!("  {}", project.technologies.join(" · ")),
        theme.accent,
    )));
    out.push(Line::from(""));
    out
}

/// Chips, sort order, the featured strip and the current page of projects.
#[must_use]
pub fn lines(
    projects: &[Project],
    categories: &[String],
    page: &PortfolioState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = vec![
        chips(categories, &page.category, theme),
        Line::from(vec![
            Span::styled("Sort: ", theme.dimmed),
            Span::styled(page.sort.label(), theme.accent),
        ]),
        Line::from(""),
    ];

    if page.shows_featured() {
        let featured = featured_projects(projects);
        if !featured.is_empty() {
            out.push(Line::from(Span::styled(
                format!("{} Featured", glyphs::STAR),
                theme.featured,
            )));
            for project in featured {
                out.push(Line::from(vec![
                    Span::styled("  ", theme.text),
                    Span::styled(project.title.clone(), theme.text),
                    Span::styled(format!("  {}", project.category), theme.dimmed),
                ]));
            }
            out.push(Line::from(""));
        }
    }

    let filtered = page.filtered(projects);
    let visible = page.pager.slice(&filtered);
    if visible.is_empty() {
        out.push(Line::from(Span::styled(
            "No projects found matching your criteria.",
            theme.dimmed,
        )));
        return out;
    }

    for (i, project) in visible.iter().enumerate() {
        out.extend(project_card(project, i == page.selected, theme, width));
    }
    if page.pager.has_more(filtered.len()) {
        out.push(Line::from(Span::styled(
            format!("  Load more ({} of {})", visible.len(), filtered.len()),
            theme.link,
        )));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::project_categories;
    use crate::domain::profile::ProfileData;

    fn render(page: &PortfolioState) -> String {
        let profile = ProfileData::builtin();
        let categories = project_categories(&profile.projects);
        lines(&profile.projects, &categories, page, &Theme::default(), 80)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_featured_strip_only_when_unfiltered() {
        let profile = ProfileData::builtin();
        let mut page = PortfolioState::new(6);
        assert!(render(&page).contains("Featured"));

        page.category = profile.projects[0].category.clone();
        assert!(!render(&page).contains("Featured"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut page = PortfolioState::new(6);
        page.search.insert_str("zzzz-no-such-project");
        assert!(render(&page).contains("No projects found"));
    }
}
