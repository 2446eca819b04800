use super::profile::{BlogPost, Project};
use std::collections::BTreeSet;

pub const ALL: &str = "All";
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Source order.
    #[default]
    Newest,
    /// Featured first, otherwise stable.
    Popular,
    Alphabetical,
}

impl SortOrder {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Popular => "Popular",
            SortOrder::Alphabetical => "A - Z",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Popular,
            SortOrder::Popular => SortOrder::Alphabetical,
            SortOrder::Alphabetical => SortOrder::Newest,
        }
    }
}

/// `All` followed by every distinct value in first-seen order.
fn chips<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = vec![ALL.to_string()];
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

#[must_use]
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    chips(projects.iter().map(|p| p.category.as_str()))
}

#[must_use]
pub fn blog_tags(posts: &[BlogPost]) -> Vec<String> {
    chips(posts.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
}

/// Returns the chip after `current`, wrapping. Unknown values restart at `All`.
#[must_use]
pub fn next_chip(chips: &[String], current: &str) -> String {
    match chips.iter().position(|c| c == current) {
        Some(i) if !chips.is_empty() => chips[(i + 1) % chips.len()].clone(),
        _ => ALL.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery<'q> {
    pub category: &'q str,
    pub search: &'q str,
    pub sort: SortOrder,
}

#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], query: &ProjectQuery<'_>) -> Vec<&'a Project> {
    let needle = query.search.to_lowercase();
    let mut result: Vec<&Project> = projects
        .iter()
        .filter(|p| query.category == ALL || p.category == query.category)
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.technologies
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
        })
        .collect();

    match query.sort {
        SortOrder::Newest => {}
        SortOrder::Popular => result.sort_by_key(|p| !p.featured),
        SortOrder::Alphabetical => {
            result.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }
    result
}

#[must_use]
pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

#[must_use]
pub fn filter_posts<'a>(posts: &'a [BlogPost], tag: &str, search: &str) -> Vec<&'a BlogPost> {
    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle) || p.excerpt.to_lowercase().contains(&needle)
        })
        .filter(|p| tag == ALL || p.tags.iter().any(|t| t == tag))
        .collect()
}

/// The first featured post among `posts`, or the first post.
#[must_use]
pub fn featured_post<'a>(posts: &[&'a BlogPost]) -> Option<&'a BlogPost> {
    posts
        .iter()
        .find(|p| p.featured)
        .or_else(|| posts.first())
        .copied()
}

/// Everything except the featured post, in order.
#[must_use]
pub fn grid_posts<'a>(posts: &[&'a BlogPost]) -> Vec<&'a BlogPost> {
    let featured = featured_post(posts).map(|p| p.id);
    posts
        .iter()
        .filter(|p| Some(p.id) != featured)
        .copied()
        .collect()
}

/// "Load more" pagination: a growing prefix of a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page_size: usize,
    pub visible: usize,
}

impl Pager {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    #[must_use]
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        &items[..self.visible.min(items.len())]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileData;

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let profile = ProfileData::builtin();
        assert_eq!(
            project_categories(&profile.projects),
            vec!["All", "Web Apps", "Mobile", "Web Design", "Branding"]
        );
    }

    #[test]
    fn test_blog_tags_are_unique() {
        let profile = ProfileData::builtin();
        let tags = blog_tags(&profile.blog);
        assert_eq!(tags[0], ALL);
        assert_eq!(tags.iter().filter(|t| *t == "Design").count(), 1);
    }

    #[test]
    fn test_filter_projects_by_technology() {
        let profile = ProfileData::builtin();
        let query = ProjectQuery {
            category: ALL,
            search: "figma",
            sort: SortOrder::Newest,
        };
        assert_eq!(
            titles(&filter_projects(&profile.projects, &query)),
            vec!["Brand Identity Guide"]
        );
    }

    #[test]
    fn test_filter_projects_by_category_and_sort() {
        let profile = ProfileData::builtin();
        let query = ProjectQuery {
            category: "Mobile",
            search: "",
            sort: SortOrder::Newest,
        };
        assert_eq!(filter_projects(&profile.projects, &query).len(), 1);

        let query = ProjectQuery {
            category: ALL,
            search: "",
            sort: SortOrder::Alphabetical,
        };
        assert_eq!(
            titles(&filter_projects(&profile.projects, &query))[0],
            "Brand Identity Guide"
        );
    }

    #[test]
    fn test_popular_sort_puts_featured_first() {
        let mut profile = ProfileData::builtin();
        profile.projects.reverse();
        let query = ProjectQuery {
            category: ALL,
            search: "",
            sort: SortOrder::Popular,
        };
        let result = filter_projects(&profile.projects, &query);
        assert!(result[0].featured && result[1].featured);
        assert!(!result[2].featured);
    }

    #[test]
    fn test_featured_post_falls_back_to_first() {
        let profile = ProfileData::builtin();
        let all = filter_posts(&profile.blog, ALL, "");
        assert_eq!(featured_post(&all).map(|p| p.id), Some(1));
        assert_eq!(grid_posts(&all).len(), 3);

        // Post 2 is the only match and is not featured.
        let tailwind = filter_posts(&profile.blog, "Tailwind", "");
        assert_eq!(featured_post(&tailwind).map(|p| p.id), Some(2));
        assert!(grid_posts(&tailwind).is_empty());

        let none = filter_posts(&profile.blog, ALL, "zzz");
        assert!(featured_post(&none).is_none());
    }

    #[test]
    fn test_pager() {
        let mut pager = Pager::new(2);
        let items = [1, 2, 3, 4, 5];
        assert_eq!(pager.slice(&items), &[1, 2]);
        assert!(pager.has_more(items.len()));
        pager.load_more();
        pager.load_more();
        assert_eq!(pager.slice(&items).len(), 5);
        assert!(!pager.has_more(items.len()));
        pager.reset();
        assert_eq!(pager.visible, 2);
    }

    #[test]
    fn test_next_chip_wraps() {
        let chips = vec!["All".to_string(), "A".to_string(), "B".to_string()];
        assert_eq!(next_chip(&chips, "All"), "A");
        assert_eq!(next_chip(&chips, "B"), "All");
        assert_eq!(next_chip(&chips, "missing"), "All");
    }
}
