use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod dark;
pub mod glyphs;
pub mod light;
pub mod palette;

pub use palette::{dim_color, Palette};

use crate::error::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => glyphs::SUN,
            ThemeMode::Dark => glyphs::MOON,
        }
    }

    /// The terminal's reported color scheme. `COLORFGBG` is `"fg;bg"` (some
    /// terminals add a middle field); background indices 7 and 9..=15 are
    /// light. Anything unreadable counts as dark.
    #[must_use]
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let bg = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(7 | 9..=15) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(FolioError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub base: Style,
    pub border: Style,
    pub border_focus: Style,
    pub backdrop: Style,

    pub title: Style,
    pub heading: Style,
    pub accent: Style,
    pub text: Style,
    pub dimmed: Style,
    pub link: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,
    pub tab_focus: Style,

    pub chip: Style,
    pub chip_active: Style,
    pub badge: Style,
    pub featured: Style,

    pub skill_bar: Style,
    pub skill_bar_empty: Style,

    pub input: Style,
    pub input_focus: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub group_header: Style,

    pub toast_success: Style,
    pub toast_error: Style,

    pub header_logo: Style,
    pub footer: Style,
    pub footer_key: Style,
    pub footer_val: Style,
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::from_palette(&light::LIGHT),
            ThemeMode::Dark => Self::from_palette(&dark::DARK),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            base: Style::default().bg(p.base).fg(p.text),
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.cyan),
            backdrop: Style::default().bg(dim_color(p.base, 0.6)),

            title: Style::default().fg(p.cyan).add_modifier(Modifier::BOLD),
            heading: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(p.cyan),
            text: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            link: Style::default()
                .fg(p.blue)
                .add_modifier(Modifier::UNDERLINED),

            tab_active: Style::default()
                .bg(p.surface0)
                .fg(p.cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(p.subtext0),
            tab_focus: Style::default()
                .fg(p.text)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),

            chip: Style::default().bg(p.surface0).fg(p.subtext1),
            chip_active: Style::default()
                .bg(p.cyan)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            badge: Style::default().bg(p.surface1).fg(p.text),
            featured: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),

            skill_bar: Style::default().fg(p.teal),
            skill_bar_empty: Style::default().fg(p.surface1),

            input: Style::default().fg(p.text).bg(p.mantle),
            input_focus: Style::default().fg(p.text).bg(p.surface0),

            list_selected: Style::default()
                .bg(p.cyan)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            group_header: Style::default()
                .fg(p.overlay1)
                .add_modifier(Modifier::BOLD),

            toast_success: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            toast_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.cyan)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.mauve)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().fg(p.subtext0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}
