//! Global shortcuts that apply before any focus-specific handling.

use super::action::Action;
use super::state::Focus;
use crate::domain::nav::shortcut_target;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl everywhere; Cmd is also accepted on macOS when the terminal reports it.
#[must_use]
pub fn is_primary_modifier(modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    cfg!(target_os = "macos") && modifiers.contains(KeyModifiers::SUPER)
}

/// Any modifier other than SHIFT.
fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(
        KeyModifiers::CONTROL
            | KeyModifiers::ALT
            | KeyModifiers::SUPER
            | KeyModifiers::META
            | KeyModifiers::HYPER,
    )
}

/// Primary+K toggles the palette whatever has focus. Digits 1-5 navigate,
/// but only unmodified and never while a text field has focus. Anything else
/// is left to the caller.
#[must_use]
pub fn route(key: &KeyEvent, focus: Focus) -> Option<Action> {
    if is_primary_modifier(key.modifiers) {
        return match key.code {
            KeyCode::Char('k' | 'K') => Some(Action::TogglePalette),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            if has_command_modifier(key.modifiers) || focus.is_text_entry() {
                return None;
            }
            c.to_digit(10)
                .and_then(shortcut_target)
                .map(Action::Navigate)
        }
        _ => None,
    }
}
