use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    navigation::Adoption,
    state::{AppState, Field, Focus},
};
use crate::domain::nav::nav_index;
use std::time::Duration;
use tracing::{debug, warn};

/// Window during which further scroll events do not schedule another
/// "back to top" visibility check.
pub const SCROLL_CHECK_DELAY: Duration = Duration::from_millis(150);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(id) => {
            if let Focus::Tabs(_) = state.focus {
                state.focus = Focus::Tabs(nav_index(*id));
            }
            let scroll = scroll_to_top(state);
            UpdateResult::Handled(Command::merge(Some(Command::WriteFragment(*id)), scroll))
        }
        Action::FragmentChanged(fragment) => UpdateResult::Handled(adopt(state, fragment)),
        Action::ScrollDown(n) => {
            if state.item_open() {
                state.scroll.modal_offset = state.scroll.modal_offset.saturating_add(*n);
                return UpdateResult::Handled(None);
            }
            let before = state.scroll.offset;
            state.scroll.scroll_down(*n);
            UpdateResult::Handled(scrolled(state, before))
        }
        Action::ScrollUp(n) => {
            if state.item_open() {
                state.scroll.modal_offset = state.scroll.modal_offset.saturating_sub(*n);
                return UpdateResult::Handled(None);
            }
            let before = state.scroll.offset;
            state.scroll.scroll_up(*n);
            UpdateResult::Handled(scrolled(state, before))
        }
        Action::ScrollToTop => UpdateResult::Handled(scroll_to_top(state)),
        Action::ScrollCheck => {
            state.scroll.run_check(state.config.back_to_top_threshold);
            UpdateResult::Handled(None)
        }
        Action::ViewLoaded(id, result) => {
            if let Err(message) = result {
                warn!(section = %id, %message, "view failed to load");
            }
            state.router.resolve(*id, result.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// The fragment-change handler: the only place `nav.active` changes.
fn adopt(state: &mut AppState, fragment: &str) -> Option<Command> {
    match state.nav.adopt(fragment) {
        Adoption::Adopted { id, changed } => {
            if changed {
                debug!(section = %id, "section changed");
                state.pages.reset_listings();
                state.focus = match state.focus {
                    Focus::Tabs(_) => Focus::Tabs(nav_index(id)),
                    Focus::Field(Field::PaletteQuery) => state.focus,
                    Focus::Field(_) | Focus::Body => Focus::Body,
                };
            }
            let scroll = scroll_to_top(state);
            Command::merge(state.router.request(id), scroll)
        }
        Adoption::Redirect(id) => Some(Command::WriteFragment(id)),
        // Nothing changes, but a first-ever unknown fragment still needs
        // the current section loaded.
        Adoption::Ignored => state.router.request(state.nav.active),
    }
}

fn scroll_to_top(state: &mut AppState) -> Option<Command> {
    let before = state.scroll.offset;
    state.scroll.to_top();
    scrolled(state, before)
}

/// Schedules the throttled visibility check after the offset moved.
fn scrolled(state: &mut AppState, before: u16) -> Option<Command> {
    if state.scroll.offset == before || !state.scroll.request_check() {
        return None;
    }
    Some(Command::delay(SCROLL_CHECK_DELAY, Action::ScrollCheck))
}
