use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    reducer,
    state::{AppState, Field, Focus},
};
use std::time::Duration;

/// The query field takes focus once the overlay has been drawn.
pub const PALETTE_FOCUS_DELAY: Duration = Duration::from_millis(50);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            if state.palette.is_open {
                close(state);
                UpdateResult::Handled(None)
            } else {
                UpdateResult::Handled(open(state))
            }
        }
        Action::OpenPalette => {
            if state.palette.is_open {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(open(state))
        }
        Action::ClosePalette => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::FocusPaletteInput => {
            if state.palette.is_open {
                state.focus = Focus::Field(Field::PaletteQuery);
            }
            UpdateResult::Handled(None)
        }
        Action::SetQuery(query) => {
            if state.palette.is_open {
                state.palette.set_query(query.clone());
            }
            UpdateResult::Handled(None)
        }
        Action::MoveSelection(delta) => {
            let count = state.palette_entries().len();
            state.palette.move_selection(*delta, count);
            UpdateResult::Handled(None)
        }
        Action::PaletteHover(index) => {
            let count = state.palette_entries().len();
            state.palette.hover(*index, count);
            UpdateResult::Handled(None)
        }
        Action::PaletteInvoke => UpdateResult::Handled(invoke_selected(state)),
        Action::PaletteClick(index) => {
            let count = state.palette_entries().len();
            if *index >= count {
                return UpdateResult::Handled(None);
            }
            state.palette.hover(*index, count);
            UpdateResult::Handled(invoke_selected(state))
        }
        _ => UpdateResult::NotHandled,
    }
}

fn open(state: &mut AppState) -> Option<Command> {
    state.palette.open();
    Some(Command::delay(PALETTE_FOCUS_DELAY, Action::FocusPaletteInput))
}

fn close(state: &mut AppState) {
    state.palette.close();
    state.focus = Focus::Body;
}

/// Closes first, then runs the entry. An empty list leaves the palette open.
fn invoke_selected(state: &mut AppState) -> Option<Command> {
    if !state.palette.is_open {
        return None;
    }
    let entries = state.palette_entries();
    let action = state.palette.selected(&entries)?.invoke();
    close(state);
    reducer::update(state, action)
}
