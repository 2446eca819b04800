use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Field, Focus, ToastKind},
};
use crate::domain::nav::{nav_index, NAV_ITEMS};
use crate::theme::Theme;
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            state.theme = Theme::from_mode(state.theme_mode);
            info!(theme = state.theme_mode.label(), "theme switched");
            UpdateResult::Handled(Some(Command::PersistTheme(state.theme_mode)))
        }
        Action::ToggleLanguage => {
            state.language = state.language.toggled();
            UpdateResult::Handled(None)
        }
        Action::CopyEmail => {
            state.clipboard = Some(state.profile.email.clone());
            UpdateResult::Handled(show_toast(
                state,
                "Email copied to clipboard!",
                ToastKind::Success,
            ))
        }
        Action::ShowToast(message, kind) => {
            UpdateResult::Handled(show_toast(state, message.clone(), *kind))
        }
        Action::DismissToast(id) => {
            state.toasts.dismiss(*id);
            UpdateResult::Handled(None)
        }

        // --- Focus ---
        Action::FocusBody => {
            state.focus = Focus::Body;
            UpdateResult::Handled(None)
        }
        Action::FocusTabs => {
            state.focus = Focus::Tabs(nav_index(state.nav.active));
            UpdateResult::Handled(None)
        }
        Action::FocusTab(index) => {
            state.focus = Focus::Tabs(index % NAV_ITEMS.len());
            UpdateResult::Handled(None)
        }
        Action::FocusSearch => {
            if let Some(field) = Field::search_for(state.nav.active) {
                close_items(state);
                state.focus = Focus::Field(field);
            }
            UpdateResult::Handled(None)
        }
        Action::FocusField(field) => {
            close_items(state);
            state.focus = Focus::Field(*field);
            UpdateResult::Handled(None)
        }
        Action::FocusNextField => {
            cycle_field(state, 1);
            UpdateResult::Handled(None)
        }
        Action::FocusPrevField => {
            cycle_field(state, -1);
            UpdateResult::Handled(None)
        }
        Action::FieldInput(key) => {
            let Focus::Field(field) = state.focus else {
                return UpdateResult::Handled(None);
            };
            let changed = state
                .pages
                .text_field_mut(field)
                .is_some_and(|area| area.input(*key));
            if changed {
                match field {
                    Field::PortfolioSearch => state.pages.portfolio.filters_changed(),
                    Field::BlogSearch => state.pages.blog.filters_changed(),
                    _ => {}
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Adds a toast and schedules its dismissal.
pub fn show_toast(
    state: &mut AppState,
    message: impl Into<String>,
    kind: ToastKind,
) -> Option<Command> {
    let id = state.toasts.push(message, kind);
    Some(Command::delay(
        state.config.toast_ttl(),
        Action::DismissToast(id),
    ))
}

fn close_items(state: &mut AppState) {
    state.pages.portfolio.detail = None;
    state.pages.blog.reading = None;
    state.scroll.modal_offset = 0;
}

fn cycle_field(state: &mut AppState, delta: isize) {
    let fields = Field::cycle(state.nav.active);
    if fields.is_empty() {
        return;
    }
    let next = match state.focus {
        Focus::Field(current) => match fields.iter().position(|f| *f == current) {
            Some(i) => (i as isize + delta).rem_euclid(fields.len() as isize) as usize,
            None => 0,
        },
        _ => 0,
    };
    state.focus = Focus::Field(fields[next]);
}
