use crate::app::command_palette::{CommandEntry, PaletteGroup, PaletteState};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{dim_area, draw_drop_shadow, hit, top_anchored_rect};

const WIDTH_PERCENT: u16 = 60;
/// Borders, query line and separator.
const CHROME_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Header(PaletteGroup),
    Entry(usize),
    Empty,
}

/// Geometry of the open palette. Shared by the renderer and mouse hit-testing
/// so both agree on which row is which entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub list: Rect,
    /// Index of the first row drawn in `list`.
    pub scroll: usize,
    rows: Vec<Row>,
}

impl PaletteLayout {
    /// Lays the palette out over `area`, scrolling from `state.scroll` just
    /// far enough that the selected entry is visible.
    #[must_use]
    pub fn compute(area: Rect, entries: &[CommandEntry], state: &PaletteState) -> Self {
        let mut rows = Vec::new();
        let mut group = None;
        for (i, entry) in entries.iter().enumerate() {
            if group != Some(entry.group()) {
                group = Some(entry.group());
                rows.push(Row::Header(entry.group()));
            }
            rows.push(Row::Entry(i));
        }
        if rows.is_empty() {
            rows.push(Row::Empty);
        }

        let top = area.height / 5;
        let height = CHROME_HEIGHT + rows.len() as u16;
        let modal = top_anchored_rect(WIDTH_PERCENT, top, height, area);

        let inner = Block::default().borders(Borders::ALL).inner(modal);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner);

        let list = chunks[2];
        let scroll = follow_selection(
            &rows,
            state.selected_index,
            state.scroll,
            usize::from(list.height),
        );

        Self {
            modal,
            query: chunks[0],
            list,
            scroll,
            rows,
        }
    }

    fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .skip(self.scroll)
            .take(usize::from(self.list.height))
    }

    /// Entry index under the pointer, if any.
    #[must_use]
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        if !hit(self.list, column, row) {
            return None;
        }
        match self.rows.get(self.scroll + usize::from(row - self.list.y))? {
            Row::Entry(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        hit(self.modal, column, row)
    }
}

/// Keeps `scroll` where it is unless the selected entry (or the header of its
/// group, when it leads the group) would fall outside `visible` rows.
fn follow_selection(rows: &[Row], selected: usize, scroll: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let Some(pos) = rows.iter().position(|row| *row == Row::Entry(selected)) else {
        return 0;
    };
    let mut scroll = scroll.min(rows.len().saturating_sub(visible));
    if pos < scroll {
        let leads_group = pos > 0 && matches!(rows[pos - 1], Row::Header(_));
        scroll = if leads_group && visible > 1 { pos - 1 } else { pos };
    } else if pos >= scroll + visible {
        scroll = pos + 1 - visible;
    }
    scroll
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
    pub entries: &'a [CommandEntry],
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PaletteLayout::compute(area, self.entries, self.state);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        dim_area(buf, area);
        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", self.theme.footer_key),
                Span::styled(" navigate ", self.theme.footer_val),
                Span::styled("↵", self.theme.footer_key),
                Span::styled(" select ", self.theme.footer_val),
                Span::styled("esc", self.theme.footer_key),
                Span::styled(" close ", self.theme.footer_val),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.base);
        block.render(layout.modal, buf);

        // Query
        let query_line = if self.state.query.is_empty() {
            Line::from(vec![
                Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.accent),
                Span::styled("Type a command or search...", self.theme.dimmed),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.accent),
                Span::styled(self.state.query.as_str(), self.theme.text),
                Span::styled(
                    "_",
                    self.theme.text.add_modifier(Modifier::SLOW_BLINK),
                ),
            ])
        };
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        // Separator
        let separator_y = layout.query.y + 1;
        if separator_y < layout.list.y {
            let separator = "─".repeat(layout.query.width as usize);
            buf.set_string(layout.query.x, separator_y, separator, self.theme.border);
        }

        // Results
        let width = layout.list.width;
        for (offset, row) in layout.visible_rows().enumerate() {
            let y = layout.list.y + offset as u16;
            let line = match row {
                Row::Header(group) => Line::from(Span::styled(
                    format!(" {}", group.title()),
                    self.theme.group_header,
                )),
                Row::Entry(i) => {
                    let entry = &self.entries[*i];
                    let selected = *i == self.state.selected_index;
                    let style = if selected {
                        self.theme.list_selected
                    } else {
                        self.theme.list_item
                    };
                    let label = format!(" {} {}", entry.icon(), entry.label());
                    let arrow = if selected { glyphs::ARROW_RIGHT } else { " " };
                    let pad = (width as usize)
                        .saturating_sub(Span::raw(label.as_str()).width() + 2);
                    Line::from(vec![
                        Span::styled(label, style),
                        Span::styled(" ".repeat(pad), style),
                        Span::styled(format!("{arrow} "), style),
                    ])
                }
                Row::Empty => Line::from(Span::styled(
                    "  No results found.",
                    self.theme.dimmed,
                )),
            };
            buf.set_line(layout.list.x, y, &line, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::search_entries;
    use crate::theme::ThemeMode;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_layout_skips_group_headers() {
        let entries = search_entries("", ThemeMode::Dark);
        let layout = PaletteLayout::compute(
            Rect::new(0, 0, 100, 40),
            &entries,
            &PaletteState::default(),
        );
        let x = layout.list.x + 2;
        let y = layout.list.y;

        assert_eq!(layout.entry_at(x, y), None); // "NAVIGATION"
        assert_eq!(layout.entry_at(x, y + 1), Some(0));
        assert_eq!(layout.entry_at(x, y + 5), Some(4));
        assert_eq!(layout.entry_at(x, y + 6), None); // "ACTIONS"
        assert_eq!(layout.entry_at(x, y + 7), Some(5));
        assert!(layout.contains(x, y));
        assert!(!layout.contains(0, 0));
    }

    #[test]
    fn test_renders_empty_state() {
        let theme = Theme::default();
        let state = PaletteState {
            is_open: true,
            query: "zzz".into(),
            selected_index: 0,
            scroll: 0,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    CommandPaletteModal {
                        theme: &theme,
                        state: &state,
                        entries: &[],
                    },
                    f.area(),
                );
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("No results found."));
        assert!(content.contains("zzz"));
    }

    #[test]
    fn test_short_terminal_scrolls_to_keep_selection_visible() {
        let entries = search_entries("", ThemeMode::Dark);
        let area = Rect::new(0, 0, 80, 10);
        let mut state = PaletteState::default();
        state.open();

        let layout = PaletteLayout::compute(area, &entries, &state);
        assert_eq!(layout.scroll, 0);
        assert!(usize::from(layout.list.height) < entries.len() + 2);

        // Last entry sits below the fold until the list follows it
        state.selected_index = entries.len() - 1;
        let layout = PaletteLayout::compute(area, &entries, &state);
        assert!(layout.scroll > 0);
        let last = entries.len() - 1;
        let drawn = (layout.list.y..layout.list.bottom())
            .any(|y| layout.entry_at(layout.list.x + 1, y) == Some(last));
        assert!(drawn);

        // Stable once settled: hovering a visible row does not move the list
        state.scroll = layout.scroll;
        assert_eq!(PaletteLayout::compute(area, &entries, &state).scroll, layout.scroll);

        // Wrapping back to the top brings the first header into view
        state.selected_index = 0;
        assert_eq!(PaletteLayout::compute(area, &entries, &state).scroll, 0);
    }

    #[test]
    fn test_selected_entry_is_rendered_on_short_terminal() {
        let theme = Theme::default();
        let entries = search_entries("", ThemeMode::Dark);
        let mut state = PaletteState::default();
        state.open();
        state.selected_index = entries.len() - 1;
        let label = entries[state.selected_index].label().to_string();

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    CommandPaletteModal {
                        theme: &theme,
                        state: &state,
                        entries: &entries,
                    },
                    f.area(),
                );
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains(&label));
    }
}
