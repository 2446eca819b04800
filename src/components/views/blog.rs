use super::{chips, paragraph};
use crate::app::state::BlogState;
use crate::domain::profile::BlogPost;
use crate::theme::{glyphs, Theme};
use ratatui::text::{Line, Span};

fn post_lines(post: &BlogPost, selected: bool, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let marker = if selected { glyphs::ARROW_RIGHT } else { " " };
    let title_style = if selected { theme.list_selected } else { theme.heading };
    let mut out = vec![
        Line::from(vec![
            Span::styled(format!("{marker} "), theme.accent),
            Span::styled(post.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::styled(format!("  {} ", post.category), theme.badge),
            Span::styled(format!("  {} · {}", post.date, post.read_time), theme.dimmed),
        ]),
    ];
    out.extend(paragraph(&post.excerpt, width, 2, theme.text));
    out.push(Line::from(""));
    out
}

/// Tag chips, the featured post, then the paged grid. Selection indexes the
/// featured post first.
#[must_use]
pub fn lines(
    posts: &[BlogPost],
    tags: &[String],
    page: &BlogState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = vec![chips(tags, &page.tag, theme), Line::from("")];

    let listing = page.listing(posts);
    let Some(featured) = listing.featured else {
        out.push(Line::from(Span::styled(
            "No articles found.",
            theme.dimmed,
        )));
        return out;
    };

    out.push(Line::from(Span::styled(
        format!("{} Featured", glyphs::STAR),
        theme.featured,
    )));
    out.extend(post_lines(featured, page.selected == 0, theme, width));

    if !listing.grid.is_empty() {
        out.push(Line::from(Span::styled("Latest Articles", theme.title)));
        out.push(Line::from(""));
    }
    for (i, post) in listing.grid.iter().enumerate() {
        out.extend(post_lines(post, page.selected == i + 1, theme, width));
    }
    if listing.has_more {
        out.push(Line::from(Span::styled("  Load more articles", theme.link)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::blog_tags;
    use crate::domain::profile::ProfileData;

    #[test]
    fn test_blog_lists_featured_first() {
        let profile = ProfileData::builtin();
        let tags = blog_tags(&profile.blog);
        let page = BlogState::new(6);
        let listing = page.listing(&profile.blog);
        let featured = listing.featured.map(|p| p.title.clone()).unwrap_or_default();

        let text: Vec<String> = lines(&profile.blog, &tags, &page, &Theme::default(), 80)
            .iter()
            .map(ToString::to_string)
            .collect();
        let first_title = text.iter().position(|l| l.contains(&featured)).unwrap();
        assert!(text[first_title - 1].contains("Featured"));
    }

    #[test]
    fn test_blog_empty_state() {
        let profile = ProfileData::builtin();
        let mut page = BlogState::new(6);
        page.search.insert_str("zzzz-nothing");
        let text: String = lines(&profile.blog, &[], &page, &Theme::default(), 80)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(text.contains("No articles found."));
    }
}
