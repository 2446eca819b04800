use crate::app::action::Action;
use crate::app::keyboard::{self, is_primary_modifier};
use crate::app::state::{AppState, Field, Focus};
use crate::app::ui;
use crate::components::back_to_top::badge_rect;
use crate::components::modals::helpers::hit;
use crate::components::modals::{item_modal_rect, PaletteLayout};
use crate::components::tabs::tab_rects;
use crate::domain::nav::NAV_ITEMS;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

const PAGE_STEP: u16 = 10;
const WHEEL_STEP: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => map_mouse(mouse, app_state, area),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if let Some(action) = keyboard::route(&key, app_state.focus) {
        return Some(action);
    }

    if app_state.palette.is_open {
        return palette_key(key, &app_state.palette.query);
    }

    if app_state.item_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Action::CloseItem),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp(1)),
            KeyCode::PageDown => Some(Action::ScrollDown(PAGE_STEP)),
            KeyCode::PageUp => Some(Action::ScrollUp(PAGE_STEP)),
            _ => None,
        };
    }

    match app_state.focus {
        Focus::Field(field) => field_key(key, field),
        Focus::Tabs(i) => match key.code {
            KeyCode::Left => Some(Action::FocusTab((i + NAV_ITEMS.len() - 1) % NAV_ITEMS.len())),
            KeyCode::Right => Some(Action::FocusTab((i + 1) % NAV_ITEMS.len())),
            KeyCode::Enter | KeyCode::Char(' ') => {
                NAV_ITEMS.get(i).map(|item| Action::Navigate(item.id))
            }
            KeyCode::Esc | KeyCode::Tab => Some(Action::FocusBody),
            _ => app_state.keymap.get_action(key, app_state.nav.active),
        },
        Focus::Body => app_state.keymap.get_action(key, app_state.nav.active),
    }
}

fn palette_key(key: KeyEvent, query: &str) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Down => Some(Action::MoveSelection(1)),
        KeyCode::Up => Some(Action::MoveSelection(-1)),
        KeyCode::Enter => Some(Action::PaletteInvoke),
        KeyCode::Backspace => {
            let mut next = query.to_string();
            next.pop();
            Some(Action::SetQuery(next))
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::SetQuery(format!("{query}{c}")))
        }
        _ => None,
    }
}

fn field_key(key: KeyEvent, field: Field) -> Option<Action> {
    let contact = matches!(
        field,
        Field::ContactName | Field::ContactEmail | Field::ContactMessage
    );
    match key.code {
        KeyCode::Esc => Some(Action::FocusBody),
        KeyCode::Tab => Some(Action::FocusNextField),
        KeyCode::BackTab => Some(Action::FocusPrevField),
        KeyCode::Char('s' | 'S') if contact && is_primary_modifier(key.modifiers) => {
            Some(Action::SubmitContact)
        }
        KeyCode::Enter => match field {
            Field::PortfolioSearch | Field::BlogSearch | Field::PaletteQuery => {
                Some(Action::FocusBody)
            }
            Field::ContactName | Field::ContactEmail => Some(Action::FocusNextField),
            Field::ContactMessage => Some(Action::FieldInput(key)),
        },
        _ => Some(Action::FieldInput(key)),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let (col, row) = (mouse.column, mouse.row);

    if app_state.palette.is_open {
        let entries = app_state.palette_entries();
        let layout = PaletteLayout::compute(area, &entries, &app_state.palette);
        return match mouse.kind {
            MouseEventKind::Moved => layout.entry_at(col, row).map(Action::PaletteHover),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(i) = layout.entry_at(col, row) {
                    Some(Action::PaletteClick(i))
                } else if layout.contains(col, row) {
                    None
                } else {
                    Some(Action::ClosePalette)
                }
            }
            MouseEventKind::ScrollDown => Some(Action::MoveSelection(1)),
            MouseEventKind::ScrollUp => Some(Action::MoveSelection(-1)),
            _ => None,
        };
    }

    if app_state.item_open() {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if !hit(item_modal_rect(area), col, row) => {
                Some(Action::CloseItem)
            }
            MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_STEP)),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_STEP)),
            _ => None,
        };
    }

    let layout = ui::get_layout(area);
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_STEP)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(i) = tab_rects(layout.tabs)
                .iter()
                .position(|rect| hit(*rect, col, row))
            {
                return NAV_ITEMS.get(i).map(|item| Action::Navigate(item.id));
            }

            let regions = ui::page_layout(layout.page, app_state.nav.active);
            if app_state.scroll.back_to_top && hit(badge_rect(regions.body), col, row) {
                return Some(Action::ScrollToTop);
            }
            if let Some(search) = regions.search {
                if hit(search, col, row) {
                    return Field::search_for(app_state.nav.active).map(Action::FocusField);
                }
            }
            if let Some(form) = regions.form {
                if hit(form, col, row) {
                    let field = match row.saturating_sub(form.y) {
                        0..=2 => Field::ContactName,
                        3..=5 => Field::ContactEmail,
                        _ => Field::ContactMessage,
                    };
                    return Some(Action::FocusField(field));
                }
            }
            if hit(layout.sidebar, col, row) {
                return Some(Action::CopyEmail);
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::search_entries;
    use crate::domain::nav::SectionId;
    use crossterm::event::KeyEventState;

    const SIZE: Size = Size {
        width: 120,
        height: 40,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, SIZE), None);
    }

    #[test]
    fn test_palette_captures_typing() {
        let mut state = AppState::default();
        state.palette.open();
        state.palette.set_query("bl".into());
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('o')), &state, SIZE),
            Some(Action::SetQuery("blo".into()))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Backspace), &state, SIZE),
            Some(Action::SetQuery("b".into()))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Up), &state, SIZE),
            Some(Action::MoveSelection(-1))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClosePalette)
        );
    }

    #[test]
    fn test_digit_before_palette_focus_navigates() {
        let mut state = AppState::default();
        state.palette.open();
        assert_eq!(state.focus, Focus::Body);
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('2')), &state, SIZE),
            Some(Action::Navigate(SectionId::Resume))
        );

        state.focus = Focus::Field(Field::PaletteQuery);
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('2')), &state, SIZE),
            Some(Action::SetQuery("2".into()))
        );
    }

    #[test]
    fn test_digits_type_into_focused_field() {
        let mut state = AppState::default();
        state.focus = Focus::Field(Field::ContactName);
        let event = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(event), &state, SIZE),
            Some(Action::FieldInput(event))
        );

        state.focus = Focus::Body;
        assert_eq!(
            map_event_to_action(Event::Key(event), &state, SIZE),
            Some(Action::Navigate(SectionId::Resume))
        );
    }

    #[test]
    fn test_tab_strip_keys() {
        let mut state = AppState::default();
        state.focus = Focus::Tabs(0);
        assert_eq!(
            map_event_to_action(key(KeyCode::Left), &state, SIZE),
            Some(Action::FocusTab(4))
        );
        state.focus = Focus::Tabs(3);
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::Navigate(SectionId::Blog))
        );
    }

    #[test]
    fn test_ctrl_s_submits_from_contact_fields() {
        let mut state = AppState::default();
        state.focus = Focus::Field(Field::ContactMessage);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(
            map_event_to_action(event, &state, SIZE),
            Some(Action::SubmitContact)
        );
    }

    #[test]
    fn test_click_on_tab_navigates() {
        let state = AppState::default();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let rect = tab_rects(layout.tabs)[2];
        assert_eq!(
            map_event_to_action(click(rect.x + 1, rect.y), &state, SIZE),
            Some(Action::Navigate(SectionId::Portfolio))
        );
    }

    #[test]
    fn test_palette_click_outside_closes() {
        let mut state = AppState::default();
        state.palette.open();
        assert_eq!(
            map_event_to_action(click(0, 0), &state, SIZE),
            Some(Action::ClosePalette)
        );

        let entries = search_entries("", state.theme_mode);
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let layout = PaletteLayout::compute(area, &entries, &state.palette);
        let row = (layout.list.y..layout.list.bottom())
            .find(|&y| layout.entry_at(layout.list.x + 1, y) == Some(1))
            .unwrap();
        assert_eq!(
            map_event_to_action(click(layout.list.x + 1, row), &state, SIZE),
            Some(Action::PaletteClick(1))
        );
    }
}
