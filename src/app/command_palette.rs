use super::action::Action;
use crate::domain::nav::{SectionId, NAV_ITEMS};
use crate::theme::{glyphs, ThemeMode};

/// Side-effecting palette actions. Closed set, dispatched by matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEffect {
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    Navigation,
    Actions,
}

impl PaletteGroup {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PaletteGroup::Navigation => "NAVIGATION",
            PaletteGroup::Actions => "ACTIONS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEntry {
    Navigation {
        id: SectionId,
        label: &'static str,
        icon: &'static str,
    },
    Action {
        label: String,
        icon: &'static str,
        effect: PaletteEffect,
    },
}

impl CommandEntry {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CommandEntry::Navigation { label, .. } => label,
            CommandEntry::Action { label, .. } => label,
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            CommandEntry::Navigation { icon, .. } | CommandEntry::Action { icon, .. } => icon,
        }
    }

    #[must_use]
    pub fn group(&self) -> PaletteGroup {
        match self {
            CommandEntry::Navigation { .. } => PaletteGroup::Navigation,
            CommandEntry::Action { .. } => PaletteGroup::Actions,
        }
    }

    /// The action this entry dispatches. Fire-and-forget: nothing flows back
    /// to the palette.
    #[must_use]
    pub fn invoke(&self) -> Action {
        match self {
            CommandEntry::Navigation { id, .. } => Action::Navigate(*id),
            CommandEntry::Action { effect, .. } => match effect {
                PaletteEffect::ToggleTheme => Action::ToggleTheme,
            },
        }
    }
}

#[must_use]
pub fn navigation_entries() -> Vec<CommandEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| CommandEntry::Navigation {
            id: item.id,
            label: item.label,
            icon: item.icon,
        })
        .collect()
}

/// Built from the current theme on every call so the label always names the
/// opposite mode.
#[must_use]
pub fn action_entries(theme: ThemeMode) -> Vec<CommandEntry> {
    let target = theme.toggled();
    vec![CommandEntry::Action {
        label: format!("Switch to {} Mode", target.label()),
        icon: target.icon(),
        effect: PaletteEffect::ToggleTheme,
    }]
}

/// Navigation entries then actions, keeping those whose label contains
/// `query` (case-insensitive).
#[must_use]
pub fn search_entries(query: &str, theme: ThemeMode) -> Vec<CommandEntry> {
    let query_lower = query.to_lowercase();
    navigation_entries()
        .into_iter()
        .chain(action_entries(theme))
        .filter(|entry| entry.label().to_lowercase().contains(&query_lower))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteState {
    pub is_open: bool,
    pub query: String,
    pub selected_index: usize,
    /// First visible list row, kept by the renderer so the selection stays
    /// on screen.
    pub scroll: usize,
}

impl PaletteState {
    pub fn open(&mut self) {
        self.is_open = true;
        self.reset();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.query.clear();
        self.selected_index = 0;
        self.scroll = 0;
    }

    /// Selection returns to the top whenever the query actually changes.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.selected_index = 0;
            self.scroll = 0;
        }
    }

    pub fn move_selection(&mut self, delta: isize, count: usize) {
        if count == 0 {
            self.selected_index = 0;
            return;
        }
        let count = count as isize;
        let current = self.selected_index as isize % count;
        self.selected_index = (current + delta).rem_euclid(count) as usize;
    }

    pub fn hover(&mut self, index: usize, count: usize) {
        if index < count {
            self.selected_index = index;
        }
    }

    #[must_use]
    pub fn selected<'e>(&self, entries: &'e [CommandEntry]) -> Option<&'e CommandEntry> {
        entries.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_everything() {
        let entries = search_entries("", ThemeMode::Dark);
        assert_eq!(entries.len(), NAV_ITEMS.len() + 1);
        assert_eq!(entries[0].label(), "About");
        assert_eq!(entries[5].label(), "Switch to Light Mode");
    }

    #[test]
    fn test_theme_action_follows_current_theme() {
        let light = action_entries(ThemeMode::Light);
        assert_eq!(light[0].label(), "Switch to Dark Mode");
        assert_eq!(light[0].icon(), glyphs::MOON);

        let dark = action_entries(ThemeMode::Dark);
        assert_eq!(dark[0].label(), "Switch to Light Mode");
        assert_eq!(dark[0].icon(), glyphs::SUN);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = search_entries("PORT", ThemeMode::Dark);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].invoke(), Action::Navigate(SectionId::Portfolio));

        let entries = search_entries("mode", ThemeMode::Light);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].invoke(), Action::ToggleTheme);

        assert!(search_entries("xyz", ThemeMode::Light).is_empty());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut state = PaletteState {
            is_open: true,
            query: String::new(),
            selected_index: 2,
            scroll: 0,
        };
        state.move_selection(1, 3);
        assert_eq!(state.selected_index, 0);
        state.move_selection(-1, 3);
        assert_eq!(state.selected_index, 2);
        state.move_selection(1, 0);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut state = PaletteState::default();
        state.open();
        state.selected_index = 3;
        state.set_query("a".into());
        assert_eq!(state.selected_index, 0);

        state.selected_index = 1;
        state.set_query("a".into());
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_open_and_close_clear_state() {
        let mut state = PaletteState::default();
        state.open();
        state.set_query("blog".into());
        state.selected_index = 0;
        state.close();
        assert_eq!(state, PaletteState::default());

        state.open();
        assert!(state.is_open);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_hover_ignores_out_of_range() {
        let mut state = PaletteState::default();
        state.hover(4, 6);
        assert_eq!(state.selected_index, 4);
        state.hover(9, 6);
        assert_eq!(state.selected_index, 4);
    }
}
