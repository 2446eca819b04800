use crate::theme::glyphs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a top-level section. The lowercase form doubles as the
/// location fragment (`#about`, `#resume`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Resume,
    Portfolio,
    Blog,
    Contact,
}

pub const DEFAULT_SECTION: SectionId = SectionId::About;

impl SectionId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Resume => "resume",
            SectionId::Portfolio => "portfolio",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    /// Exact, case-sensitive match against the known ids.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        NAV_ITEMS
            .iter()
            .find(|item| item.id.as_str() == raw)
            .map(|item| item.id)
    }

    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Fixed navigation order. Position `i` is bound to digit shortcut `i + 1`
/// and is also the palette listing order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: SectionId::About,
        label: "About",
        icon: glyphs::ABOUT,
    },
    NavItem {
        id: SectionId::Resume,
        label: "Resume",
        icon: glyphs::RESUME,
    },
    NavItem {
        id: SectionId::Portfolio,
        label: "Portfolio",
        icon: glyphs::PORTFOLIO,
    },
    NavItem {
        id: SectionId::Blog,
        label: "Blog",
        icon: glyphs::BLOG,
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
        icon: glyphs::CONTACT,
    },
];

#[must_use]
pub fn nav_index(id: SectionId) -> usize {
    NAV_ITEMS
        .iter()
        .position(|item| item.id == id)
        .unwrap_or_default()
}

#[must_use]
pub fn nav_item(id: SectionId) -> &'static NavItem {
    &NAV_ITEMS[nav_index(id)]
}

/// Maps a 1-based digit to its section.
#[must_use]
pub fn shortcut_target(digit: u32) -> Option<SectionId> {
    let idx = usize::try_from(digit).ok()?.checked_sub(1)?;
    NAV_ITEMS.get(idx).map(|item| item.id)
}
