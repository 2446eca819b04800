// Plain unicode so the UI renders without a patched font.

pub const LOGO: &str = "◆";

// Section icons
pub const ABOUT: &str = "☺";
pub const RESUME: &str = "≡";
pub const PORTFOLIO: &str = "▣";
pub const BLOG: &str = "✎";
pub const CONTACT: &str = "✉";

// Palette
pub const SEARCH: &str = "⌕";
pub const COMMAND: &str = "⌘";
pub const ARROW_RIGHT: &str = "→";
pub const SUN: &str = "☀";
pub const MOON: &str = "☾";

// Misc
pub const ARROW_UP: &str = "↑";
pub const CHECK: &str = "✔";
pub const ALERT: &str = "✖";
pub const STAR: &str = "★";
pub const BAR_FULL: &str = "█";
pub const BAR_EMPTY: &str = "░";
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
