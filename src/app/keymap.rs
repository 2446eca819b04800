use super::action::Action;
use crate::domain::nav::SectionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

const PAGE: u16 = 10;

/// Body-focus bindings. Section maps override the global one.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub portfolio: HashMap<KeyEvent, Action>,
    pub blog: HashMap<KeyEvent, Action>,
    pub contact: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut portfolio = HashMap::new();
        let mut blog = HashMap::new();
        let mut contact = HashMap::new();

        // --- Global ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Char('t')), Action::ToggleTheme);
        global.insert(key(KeyCode::Char('l')), Action::ToggleLanguage);
        global.insert(key(KeyCode::Char('c')), Action::CopyEmail);
        global.insert(key(KeyCode::Char(':')), Action::OpenPalette);
        global.insert(key(KeyCode::Char('/')), Action::FocusSearch);
        global.insert(key(KeyCode::Tab), Action::FocusTabs);
        global.insert(key(KeyCode::Char('j')), Action::ScrollDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key(KeyCode::Char('k')), Action::ScrollUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(PAGE));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(PAGE));
        global.insert(key(KeyCode::Char('g')), Action::ScrollToTop);
        global.insert(key(KeyCode::Home), Action::ScrollToTop);

        // --- Listing pages ---
        for map in [&mut portfolio, &mut blog] {
            map.insert(key(KeyCode::Char('j')), Action::SelectItemNext);
            map.insert(key(KeyCode::Down), Action::SelectItemNext);
            map.insert(key(KeyCode::Char('k')), Action::SelectItemPrev);
            map.insert(key(KeyCode::Up), Action::SelectItemPrev);
            map.insert(key(KeyCode::Enter), Action::OpenItem);
            map.insert(key(KeyCode::Char('f')), Action::CycleFilter);
            map.insert(key(KeyCode::Char('m')), Action::LoadMore);
        }
        portfolio.insert(key(KeyCode::Char('s')), Action::CycleSort);

        // --- Contact ---
        contact.insert(
            key(KeyCode::Enter),
            Action::FocusField(super::state::Field::ContactName),
        );
        contact.insert(key(KeyCode::Char('s')), Action::SubmitContact);

        Self {
            global,
            portfolio,
            blog,
            contact,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, section: SectionId) -> Option<Action> {
        let event = normalize(event);
        let overrides = match section {
            SectionId::Portfolio => Some(&self.portfolio),
            SectionId::Blog => Some(&self.blog),
            SectionId::Contact => Some(&self.contact),
            SectionId::About | SectionId::Resume => None,
        };
        if let Some(action) = overrides.and_then(|map| map.get(&event)) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

/// Drops kind/state and the SHIFT that some terminals report for
/// punctuation such as `:`.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
