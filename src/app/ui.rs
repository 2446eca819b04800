use crate::app::router::{SectionView, ViewSlot};
use crate::app::state::{AppState, Field, Focus, ScrollState};
use crate::components::back_to_top::BackToTop;
use crate::components::field::FieldBox;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{CommandPaletteModal, ItemContent, ItemModal, PaletteLayout};
use crate::components::sidebar::Sidebar;
use crate::components::tabs::Tabs;
use crate::components::toast::Toasts;
use crate::components::views::{about, blog, contact, portfolio, resume};
use crate::domain::nav::{nav_item, SectionId};
use crate::theme::{glyphs, Theme};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Sidebar is dropped below this terminal width.
const SIDEBAR_MIN_WIDTH: u16 = 90;
const SIDEBAR_WIDTH: u16 = 30;

pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub tabs: Rect,
    pub page: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Middle
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let sidebar_width = if area.width >= SIDEBAR_MIN_WIDTH {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(main[1]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(middle[1]);

    AppLayout {
        header: main[0],
        sidebar: middle[0],
        tabs: content[0],
        page: content[1],
        footer: main[2],
    }
}

/// Regions inside the bordered page frame.
pub struct PageLayout {
    /// Scrollable content.
    pub body: Rect,
    pub search: Option<Rect>,
    pub form: Option<Rect>,
}

pub fn page_layout(page: Rect, section: SectionId) -> PageLayout {
    let inner = Block::default().borders(Borders::ALL).inner(page);
    match section {
        SectionId::Portfolio | SectionId::Blog => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(inner);
            PageLayout {
                body: chunks[1],
                search: Some(chunks[0]),
                form: None,
            }
        }
        SectionId::Contact => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(inner);
            PageLayout {
                body: chunks[0],
                search: None,
                form: Some(chunks[1]),
            }
        }
        SectionId::About | SectionId::Resume => PageLayout {
            body: inner,
            search: None,
            form: None,
        },
    }
}

/// Renders `lines` at the current offset after publishing the new bound.
fn render_scrolled(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, scroll: &mut ScrollState) {
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    scroll.max_offset = total.saturating_sub(area.height);
    scroll.offset = scroll.offset.min(scroll.max_offset);
    f.render_widget(Paragraph::new(lines).scroll((scroll.offset, 0)), area);
}

fn render_status(
    f: &mut Frame,
    area: Rect,
    slot: Option<&ViewSlot>,
    frame_count: u64,
    theme: &Theme,
) {
    let lines = match slot {
        Some(ViewSlot::Failed(message)) => vec![
            Line::from(Span::styled(
                format!("{} Could not load this section", glyphs::ALERT),
                theme.toast_error,
            )),
            Line::from(""),
            Line::from(Span::styled(message.clone(), theme.dimmed)),
        ],
        _ => {
            let frame = glyphs::SPINNER[(frame_count as usize) % glyphs::SPINNER.len()];
            vec![Line::from(vec![
                Span::styled(frame, theme.accent),
                Span::styled(" Loading...", theme.dimmed),
            ])]
        }
    };
    let top = area.height / 3;
    let rect = Rect::new(area.x, area.y + top, area.width, area.height.saturating_sub(top));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn render_page(f: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let section = state.nav.active;
    let item = nav_item(section);
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{} {}", item.icon, item.label.to_uppercase()), theme.title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focus == Focus::Body {
            theme.border_focus
        } else {
            theme.border
        })
        .style(theme.base);
    f.render_widget(block, area);

    let regions = page_layout(area, section);
    let view = match state.router.slot(section) {
        Some(ViewSlot::Ready(view)) => view.clone(),
        slot => {
            render_status(f, regions.body, slot, state.frame_count, theme);
            return;
        }
    };

    let profile = state.profile.clone();
    let width = regions.body.width;
    let lines = match view.as_ref() {
        SectionView::About => about::lines(&profile, theme, width),
        SectionView::Resume => resume::lines(&profile, theme, width),
        SectionView::Portfolio { categories } => {
            portfolio::lines(&profile.projects, categories, &state.pages.portfolio, theme, width)
        }
        SectionView::Blog { tags } => {
            blog::lines(&profile.blog, tags, &state.pages.blog, theme, width)
        }
        SectionView::Contact => contact::info_lines(&profile, theme, width),
    };
    render_scrolled(f, regions.body, lines, &mut state.scroll);

    if let Some(search) = regions.search {
        let (field, input) = match section {
            SectionId::Blog => (Field::BlogSearch, &state.pages.blog.search),
            _ => (Field::PortfolioSearch, &state.pages.portfolio.search),
        };
        f.render_widget(
            FieldBox {
                theme,
                title: field.label(),
                input,
                focused: state.focus == Focus::Field(field),
            },
            search,
        );
    }

    if let Some(form) = regions.form {
        f.render_widget(
            contact::ContactForm {
                theme,
                state: &state.pages.contact,
                focus: state.focus,
                frame_count: state.frame_count,
            },
            form,
        );
    }

    if state.scroll.back_to_top {
        f.render_widget(BackToTop { theme }, regions.body);
    }
}

fn render_item_modal(f: &mut Frame, state: &mut AppState, theme: &Theme) {
    let profile = state.profile.clone();
    let content = match state.nav.active {
        SectionId::Portfolio => state
            .pages
            .portfolio
            .detail
            .and_then(|id| profile.projects.iter().find(|p| p.id == id))
            .map(ItemContent::Project),
        SectionId::Blog => state
            .pages
            .blog
            .reading
            .and_then(|id| profile.blog.iter().find(|p| p.id == id))
            .map(ItemContent::Post),
        _ => None,
    };
    let Some(content) = content else {
        return;
    };

    let mut modal = ItemModal {
        theme,
        content,
        scroll: 0,
    };
    let max = modal.max_scroll(f.area());
    state.scroll.modal_offset = state.scroll.modal_offset.min(max);
    modal.scroll = state.scroll.modal_offset;
    f.render_widget(modal, f.area());
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = state.theme.clone();
    let layout = get_layout(area);

    f.render_widget(
        Header {
            theme: &theme,
            name: &state.profile.name,
            active: state.nav.active,
            mode: state.theme_mode,
            language: state.language,
        },
        layout.header,
    );

    if !layout.sidebar.is_empty() {
        f.render_widget(
            Sidebar {
                theme: &theme,
                profile: &state.profile,
                language: state.language,
                copied: state.clipboard.is_some(),
            },
            layout.sidebar,
        );
    }

    let focused_tab = match state.focus {
        Focus::Tabs(i) => Some(i),
        _ => None,
    };
    f.render_widget(
        Tabs {
            theme: &theme,
            active: state.nav.active,
            focused: focused_tab,
        },
        layout.tabs,
    );

    render_page(f, layout.page, state, &theme);

    f.render_widget(Footer { state, theme: &theme }, layout.footer);

    // --- Overlays ---
    render_item_modal(f, state, &theme);

    if !state.toasts.is_empty() {
        let toast_area = Rect::new(
            area.x,
            area.y + 1,
            area.width.saturating_sub(1),
            area.height.saturating_sub(2),
        );
        f.render_widget(
            Toasts {
                theme: &theme,
                items: &state.toasts.items,
            },
            toast_area,
        );
    }

    if state.palette.is_open {
        let entries = state.palette_entries();
        state.palette.scroll = PaletteLayout::compute(area, &entries, &state.palette).scroll;
        f.render_widget(
            CommandPaletteModal {
                theme: &theme,
                state: &state.palette,
                entries: &entries,
            },
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_collapses_when_narrow() {
        let wide = get_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(wide.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(wide.tabs.x, SIDEBAR_WIDTH);

        let narrow = get_layout(Rect::new(0, 0, 60, 40));
        assert!(narrow.sidebar.is_empty());
        assert_eq!(narrow.tabs.x, 0);
    }

    #[test]
    fn test_page_regions_by_section() {
        let page = Rect::new(0, 4, 80, 30);
        assert!(page_layout(page, SectionId::Portfolio).search.is_some());
        assert!(page_layout(page, SectionId::Contact).form.is_some());
        let about = page_layout(page, SectionId::About);
        assert_eq!(about.body, Rect::new(1, 5, 78, 28));
    }
}
