use crate::domain::nav::SectionId;

/// Editable text fields. While one of them has focus the digit shortcuts are
/// suppressed and printable keys are routed into the field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    PaletteQuery,
    PortfolioSearch,
    BlogSearch,
    ContactName,
    ContactEmail,
    ContactMessage,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::PaletteQuery => "Search",
            Field::PortfolioSearch => "Search projects",
            Field::BlogSearch => "Search articles",
            Field::ContactName => "Name",
            Field::ContactEmail => "Email",
            Field::ContactMessage => "Message",
        }
    }

    /// Fields reachable with Tab/BackTab on a section, in tab order.
    #[must_use]
    pub fn cycle(section: SectionId) -> &'static [Field] {
        match section {
            SectionId::Portfolio => &[Field::PortfolioSearch],
            SectionId::Blog => &[Field::BlogSearch],
            SectionId::Contact => &[
                Field::ContactName,
                Field::ContactEmail,
                Field::ContactMessage,
            ],
            SectionId::About | SectionId::Resume => &[],
        }
    }

    #[must_use]
    pub fn search_for(section: SectionId) -> Option<Field> {
        match section {
            SectionId::Portfolio => Some(Field::PortfolioSearch),
            SectionId::Blog => Some(Field::BlogSearch),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page content; keys go through the keymap.
    #[default]
    Body,
    /// Tab strip, holding the index of the focused (not necessarily active) tab.
    Tabs(usize),
    Field(Field),
}

impl Focus {
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::Field(_))
    }

    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fields_are_text_entry() {
        assert!(!Focus::Body.is_text_entry());
        assert!(!Focus::Tabs(2).is_text_entry());
        assert!(Focus::Field(Field::ContactEmail).is_text_entry());
        assert!(Focus::Field(Field::PaletteQuery).is_text_entry());
    }

    #[test]
    fn test_field_cycles() {
        assert_eq!(Field::cycle(SectionId::Contact).len(), 3);
        assert!(Field::cycle(SectionId::About).is_empty());
        assert_eq!(
            Field::search_for(SectionId::Blog),
            Some(Field::BlogSearch)
        );
        assert_eq!(Field::search_for(SectionId::Contact), None);
    }
}
