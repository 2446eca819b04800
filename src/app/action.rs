use crate::app::command::Command;
use crate::app::router::SectionView;
use crate::app::state::{Field, ToastKind};
use crate::domain::nav::SectionId;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    Navigate(SectionId),     // set_active: write the fragment, scroll to top
    FragmentChanged(String), // Location notification (the only writer of the active id)
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToTop,
    ScrollCheck, // Throttled back-to-top visibility check

    // --- Focus ---
    FocusBody,
    FocusTabs,        // Enter the tab strip at the active tab
    FocusTab(usize),  // Move tab-strip focus (Left/Right)
    FocusSearch,      // Focus the active page's search field
    FocusField(Field),
    FocusNextField,
    FocusPrevField,
    FieldInput(crossterm::event::KeyEvent),

    // --- Command Palette ---
    TogglePalette,
    OpenPalette,
    ClosePalette,
    FocusPaletteInput,   // Fires shortly after opening, once the overlay is up
    SetQuery(String),
    MoveSelection(isize), // +1 ArrowDown, -1 ArrowUp (wraps)
    PaletteHover(usize),
    PaletteInvoke,       // Enter
    PaletteClick(usize), // Hover + invoke

    // --- Preferences ---
    ToggleTheme,
    ToggleLanguage,
    CopyEmail,

    // --- Content ---
    ViewLoaded(SectionId, Result<Arc<SectionView>, String>),

    // --- Portfolio / Blog ---
    SelectItemNext,
    SelectItemPrev,
    OpenItem,
    CloseItem,
    CycleFilter, // Category (portfolio) or tag (blog) chips
    CycleSort,
    LoadMore,

    // --- Contact ---
    SubmitContact,
    ContactSent,

    // --- Toasts ---
    ShowToast(String, ToastKind),
    DismissToast(u64),
}
