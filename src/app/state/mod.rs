use super::command_palette::{search_entries, CommandEntry, PaletteState};
use super::config::Config;
use super::keymap::KeyMap;
use super::navigation::NavigationState;
use super::router::ContentRouter;
use crate::domain::profile::{Language, ProfileData};
use crate::theme::{Theme, ThemeMode};
use std::sync::Arc;

pub mod focus;
pub mod input;
pub mod pages;
pub mod scroll;
pub mod toast;

// Re-exports
pub use focus::{Field, Focus};
pub use input::AppTextArea;
pub use pages::{BlogListing, BlogState, ContactState, Pages, PortfolioState};
pub use scroll::ScrollState;
pub use toast::{Toast, ToastKind, ToastState};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Navigation & Content ---
    pub nav: NavigationState,
    pub router: ContentRouter,
    pub pages: Pages<'a>,
    pub scroll: ScrollState,

    // --- Interaction ---
    pub focus: Focus,
    pub palette: PaletteState,
    pub toasts: ToastState,

    // --- Preferences ---
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub language: Language,

    // --- Data ---
    pub profile: Arc<ProfileData>,
    /// Last text "copied" by the user.
    pub clipboard: Option<String>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub config: Config,
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self::new(
            Arc::new(ProfileData::builtin()),
            Config::default(),
            ThemeMode::default(),
        )
    }
}

impl AppState<'_> {
    #[must_use]
    pub fn new(profile: Arc<ProfileData>, config: Config, theme_mode: ThemeMode) -> Self {
        Self {
            should_quit: false,
            nav: NavigationState::default(),
            router: ContentRouter::default(),
            pages: Pages::new(config.page_size),
            scroll: ScrollState::default(),
            focus: Focus::default(),
            palette: PaletteState::default(),
            toasts: ToastState::default(),
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            language: Language::default(),
            profile,
            clipboard: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            config,
        }
    }

    /// Entries currently listed by the palette.
    #[must_use]
    pub fn palette_entries(&self) -> Vec<CommandEntry> {
        search_entries(&self.palette.query, self.theme_mode)
    }

    /// Whether a portfolio detail or blog reader is covering the page.
    #[must_use]
    pub fn item_open(&self) -> bool {
        self.pages.portfolio.detail.is_some() || self.pages.blog.reading.is_some()
    }
}
