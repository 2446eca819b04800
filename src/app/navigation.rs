use crate::domain::nav::{SectionId, DEFAULT_SECTION};
use tracing::debug;

/// Rendered navigation state. Only [`NavigationState::adopt`] writes
/// `active`, and only in response to a fragment-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active: SectionId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION,
        }
    }
}

/// Outcome of applying a fragment to the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adoption {
    /// Known section; `changed` is false when it was already active.
    Adopted { id: SectionId, changed: bool },
    /// Empty fragment: the default section must be written to the location,
    /// which produces a fresh notification.
    Redirect(SectionId),
    /// Unknown section: previous state is kept.
    Ignored,
}

#[must_use]
pub fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// `known -> Ok`, `empty -> Err(default)`, `unknown -> None`.
fn resolve(fragment: &str) -> Option<Result<SectionId, SectionId>> {
    let raw = strip_hash(fragment);
    if raw.is_empty() {
        return Some(Err(DEFAULT_SECTION));
    }
    SectionId::parse(raw).map(Ok)
}

impl NavigationState {
    pub fn adopt(&mut self, fragment: &str) -> Adoption {
        match resolve(fragment) {
            Some(Ok(id)) => {
                let changed = self.active != id;
                self.active = id;
                Adoption::Adopted { id, changed }
            }
            Some(Err(default)) => Adoption::Redirect(default),
            None => {
                debug!(fragment, "ignoring unknown fragment");
                Adoption::Ignored
            }
        }
    }
}

/// The shared location fragment (`#<section>`). Both user navigation and
/// programmatic writes go through [`Location::write`]; the runtime turns a
/// successful write into a `FragmentChanged` notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    fragment: String,
}

impl Location {
    /// Accepts `about`, `#about` or an empty string. Unknown values are kept
    /// verbatim so deep links behave the same as in-session writes.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let raw = strip_hash(initial.trim());
        let fragment = if raw.is_empty() {
            String::new()
        } else {
            format!("#{raw}")
        };
        Self { fragment }
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns false when the fragment already had this value; no
    /// notification is due in that case.
    pub fn write(&mut self, id: SectionId) -> bool {
        let next = id.fragment();
        if self.fragment == next {
            return false;
        }
        self.fragment = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adopt_known_fragment() {
        let mut nav = NavigationState::default();
        assert_eq!(
            nav.adopt("#blog"),
            Adoption::Adopted {
                id: SectionId::Blog,
                changed: true
            }
        );
        assert_eq!(nav.active, SectionId::Blog);
    }

    #[test]
    fn test_adopt_is_idempotent() {
        let mut nav = NavigationState::default();
        nav.adopt("#resume");
        let before = nav;
        assert_eq!(
            nav.adopt("#resume"),
            Adoption::Adopted {
                id: SectionId::Resume,
                changed: false
            }
        );
        assert_eq!(nav, before);
    }

    #[test]
    fn test_empty_fragment_redirects_to_about() {
        let mut nav = NavigationState {
            active: SectionId::Contact,
        };
        assert_eq!(nav.adopt(""), Adoption::Redirect(SectionId::About));
        assert_eq!(nav.adopt("#"), Adoption::Redirect(SectionId::About));
        // The redirect itself does not touch state; the follow-up write does.
        assert_eq!(nav.active, SectionId::Contact);
    }

    #[test]
    fn test_unknown_fragment_keeps_previous() {
        let mut nav = NavigationState {
            active: SectionId::Portfolio,
        };
        assert_eq!(nav.adopt("#nonexistent"), Adoption::Ignored);
        assert_eq!(nav.active, SectionId::Portfolio);
    }

    #[test]
    fn test_location_write_reports_change() {
        let mut location = Location::new("");
        assert_eq!(location.fragment(), "");
        assert!(location.write(SectionId::Resume));
        assert_eq!(location.fragment(), "#resume");
        assert!(!location.write(SectionId::Resume));
    }

    #[test]
    fn test_location_normalizes_initial_value() {
        assert_eq!(Location::new("blog").fragment(), "#blog");
        assert_eq!(Location::new("#blog").fragment(), "#blog");
        assert_eq!(Location::new("  ").fragment(), "");
        assert_eq!(Location::new("#nope").fragment(), "#nope");
    }
}
