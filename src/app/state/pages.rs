use super::focus::Field;
use super::input::AppTextArea;
use crate::domain::catalog::{
    featured_post, filter_posts, filter_projects, grid_posts, Pager, ProjectQuery, SortOrder, ALL,
};
use crate::domain::profile::{BlogPost, Project};

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState<'a> {
    pub category: String,
    pub search: AppTextArea<'a>,
    pub sort: SortOrder,
    pub pager: Pager,
    pub selected: usize,
    /// Project shown in the detail modal.
    pub detail: Option<u32>,
}

impl PortfolioState<'_> {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            category: ALL.to_string(),
            search: AppTextArea::with_placeholder(Field::PortfolioSearch.label()),
            sort: SortOrder::default(),
            pager: Pager::new(page_size),
            selected: 0,
            detail: None,
        }
    }

    /// Every project matching the current filters, before paging.
    #[must_use]
    pub fn filtered<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        let search = self.search.text();
        let query = ProjectQuery {
            category: &self.category,
            search: search.trim(),
            sort: self.sort,
        };
        filter_projects(projects, &query)
    }

    #[must_use]
    pub fn visible<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        let filtered = self.filtered(projects);
        self.pager.slice(&filtered).to_vec()
    }

    /// The featured strip only shows on the unfiltered listing.
    #[must_use]
    pub fn shows_featured(&self) -> bool {
        self.category == ALL && self.search.is_blank()
    }

    /// Filter, search or sort changed: back to the first page.
    pub fn filters_changed(&mut self) {
        self.pager.reset();
        self.selected = 0;
    }
}

/// Featured post plus the paged remainder, as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogListing<'p> {
    pub featured: Option<&'p BlogPost>,
    pub grid: Vec<&'p BlogPost>,
    pub has_more: bool,
}

impl<'p> BlogListing<'p> {
    /// Selectable posts in display order: featured first, then the grid.
    #[must_use]
    pub fn entries(&self) -> Vec<&'p BlogPost> {
        self.featured
            .into_iter()
            .chain(self.grid.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogState<'a> {
    pub tag: String,
    pub search: AppTextArea<'a>,
    pub pager: Pager,
    pub selected: usize,
    /// Post open in the reader.
    pub reading: Option<u32>,
}

impl BlogState<'_> {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            tag: ALL.to_string(),
            search: AppTextArea::with_placeholder(Field::BlogSearch.label()),
            pager: Pager::new(page_size),
            selected: 0,
            reading: None,
        }
    }

    #[must_use]
    pub fn listing<'p>(&self, posts: &'p [BlogPost]) -> BlogListing<'p> {
        let search = self.search.text();
        let matches = filter_posts(posts, &self.tag, search.trim());
        let rest = grid_posts(&matches);
        BlogListing {
            featured: featured_post(&matches),
            grid: self.pager.slice(&rest).to_vec(),
            has_more: self.pager.has_more(rest.len()),
        }
    }

    pub fn filters_changed(&mut self) {
        self.pager.reset();
        self.selected = 0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactState<'a> {
    pub name: AppTextArea<'a>,
    pub email: AppTextArea<'a>,
    pub message: AppTextArea<'a>,
    pub sending: bool,
}

impl Default for ContactState<'_> {
    fn default() -> Self {
        Self {
            name: AppTextArea::with_placeholder("John Doe"),
            email: AppTextArea::with_placeholder("john@example.com"),
            message: AppTextArea::with_placeholder("Tell me about your project..."),
            sending: false,
        }
    }
}

impl ContactState<'_> {
    /// All fields filled and the email at least looks like one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_blank()
            && !self.message.is_blank()
            && !self.email.is_blank()
            && self.email.text().contains('@')
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pages<'a> {
    pub portfolio: PortfolioState<'a>,
    pub blog: BlogState<'a>,
    pub contact: ContactState<'a>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            portfolio: PortfolioState::new(page_size),
            blog: BlogState::new(page_size),
            contact: ContactState::default(),
            page_size,
        }
    }

    /// Listing pages start fresh whenever their section is left. The contact
    /// draft survives.
    pub fn reset_listings(&mut self) {
        self.portfolio = PortfolioState::new(self.page_size);
        self.blog = BlogState::new(self.page_size);
    }

    pub fn text_field_mut(&mut self, field: Field) -> Option<&mut AppTextArea<'a>> {
        match field {
            Field::PaletteQuery => None,
            Field::PortfolioSearch => Some(&mut self.portfolio.search),
            Field::BlogSearch => Some(&mut self.blog.search),
            Field::ContactName => Some(&mut self.contact.name),
            Field::ContactEmail => Some(&mut self.contact.email),
            Field::ContactMessage => Some(&mut self.contact.message),
        }
    }
}

impl Default for Pages<'_> {
    fn default() -> Self {
        Self::new(crate::domain::catalog::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileData;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_into(area: &mut AppTextArea<'_>, text: &str) {
        for c in text.chars() {
            area.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_portfolio_featured_strip_only_unfiltered() {
        let mut page = PortfolioState::new(6);
        assert!(page.shows_featured());
        page.category = "Mobile".into();
        assert!(!page.shows_featured());
        page.category = ALL.into();
        type_into(&mut page.search, "react");
        assert!(!page.shows_featured());
    }

    #[test]
    fn test_portfolio_paging() {
        let profile = ProfileData::builtin();
        let mut page = PortfolioState::new(2);
        assert_eq!(page.visible(&profile.projects).len(), 2);
        page.pager.load_more();
        page.selected = 3;
        assert_eq!(page.visible(&profile.projects).len(), 4);
        page.filters_changed();
        assert_eq!(page.visible(&profile.projects).len(), 2);
        assert_eq!(page.selected, 0);
    }

    #[test]
    fn test_blog_listing_entries() {
        let profile = ProfileData::builtin();
        let page = BlogState::new(6);
        let listing = page.listing(&profile.blog);
        assert_eq!(listing.featured.map(|p| p.id), Some(1));
        assert_eq!(listing.entries().len(), profile.blog.len());
        assert!(!listing.has_more);

        let small = BlogState::new(1);
        let listing = small.listing(&profile.blog);
        assert_eq!(listing.grid.len(), 1);
        assert!(listing.has_more);
    }

    #[test]
    fn test_contact_validation() {
        let mut contact = ContactState::default();
        assert!(!contact.is_valid());
        type_into(&mut contact.name, "Sam");
        type_into(&mut contact.email, "sam.example.com");
        type_into(&mut contact.message, "Hello");
        assert!(!contact.is_valid());

        contact.email.clear();
        type_into(&mut contact.email, "sam@example.com");
        assert!(contact.is_valid());

        contact.clear();
        assert!(contact.name.is_blank() && contact.message.is_blank());
    }

    #[test]
    fn test_reset_listings_keeps_contact_draft() {
        let mut pages = Pages::new(6);
        pages.portfolio.category = "Mobile".into();
        type_into(&mut pages.contact.name, "Sam");
        pages.reset_listings();
        assert_eq!(pages.portfolio.category, ALL);
        assert_eq!(pages.contact.name.text(), "Sam");
    }
}
