use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::ui::show_toast,
    router::SectionView,
    state::{AppState, Focus, ToastKind},
};
use crate::domain::catalog::next_chip;
use crate::domain::nav::SectionId;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Simulated network round trip for the contact form.
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(1500);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SubmitContact => UpdateResult::Handled(submit_contact(state)),
        Action::ContactSent => {
            let contact = &mut state.pages.contact;
            contact.sending = false;
            contact.clear();
            info!("contact message sent");
            UpdateResult::Handled(show_toast(
                state,
                "Message sent successfully!",
                ToastKind::Success,
            ))
        }
        Action::CloseItem => {
            state.pages.portfolio.detail = None;
            state.pages.blog.reading = None;
            state.scroll.modal_offset = 0;
            UpdateResult::Handled(None)
        }
        Action::SelectItemNext
        | Action::SelectItemPrev
        | Action::OpenItem
        | Action::CycleFilter
        | Action::CycleSort
        | Action::LoadMore => {
            match state.nav.active {
                SectionId::Portfolio => portfolio(state, action),
                SectionId::Blog => blog(state, action),
                _ => {}
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn portfolio(state: &mut AppState, action: &Action) {
    let profile = Arc::clone(&state.profile);
    let page = &mut state.pages.portfolio;
    match action {
        Action::SelectItemNext | Action::SelectItemPrev => {
            let count = page.visible(&profile.projects).len();
            page.selected = step(page.selected, count, action == &Action::SelectItemNext);
        }
        Action::OpenItem => {
            page.detail = page
                .visible(&profile.projects)
                .get(page.selected)
                .map(|p| p.id);
            state.scroll.modal_offset = 0;
        }
        Action::CycleFilter => {
            if let Some(SectionView::Portfolio { categories }) =
                state.router.view(SectionId::Portfolio)
            {
                page.category = next_chip(categories, &page.category);
                page.filters_changed();
            }
        }
        Action::CycleSort => {
            page.sort = page.sort.next();
            page.filters_changed();
        }
        Action::LoadMore => {
            let total = page.filtered(&profile.projects).len();
            if page.pager.has_more(total) {
                page.pager.load_more();
            }
        }
        _ => {}
    }
}

fn blog(state: &mut AppState, action: &Action) {
    let profile = Arc::clone(&state.profile);
    let page = &mut state.pages.blog;
    match action {
        Action::SelectItemNext | Action::SelectItemPrev => {
            let count = page.listing(&profile.blog).entries().len();
            page.selected = step(page.selected, count, action == &Action::SelectItemNext);
        }
        Action::OpenItem => {
            page.reading = page
                .listing(&profile.blog)
                .entries()
                .get(page.selected)
                .map(|p| p.id);
            state.scroll.modal_offset = 0;
        }
        Action::CycleFilter => {
            if let Some(SectionView::Blog { tags }) = state.router.view(SectionId::Blog) {
                page.tag = next_chip(tags, &page.tag);
                page.filters_changed();
            }
        }
        Action::LoadMore => {
            if page.listing(&profile.blog).has_more {
                page.pager.load_more();
            }
        }
        _ => {}
    }
}

/// Clamped, non-wrapping list step.
fn step(current: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (current + 1).min(count - 1)
    } else {
        current.saturating_sub(1).min(count - 1)
    }
}

fn submit_contact(state: &mut AppState) -> Option<Command> {
    if state.pages.contact.sending {
        return None;
    }
    if !state.pages.contact.is_valid() {
        return show_toast(
            state,
            "Please fill in every field with a valid email.",
            ToastKind::Error,
        );
    }
    state.pages.contact.sending = true;
    state.focus = Focus::Body;
    Some(Command::delay(CONTACT_SEND_DELAY, Action::ContactSent))
}
