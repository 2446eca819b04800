use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppState, Field, Focus};
use crate::domain::nav::SectionId;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.palette.is_open {
        return vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑↓", "move"),
                FooterItem::new("Enter", "run"),
                FooterItem::new("Esc", "close"),
            ],
        }];
    }

    if state.item_open() {
        return vec![FooterGroup {
            name: "DETAIL",
            items: vec![
                FooterItem::new("j/k", "scroll"),
                FooterItem::new("Esc", "close"),
            ],
        }];
    }

    match state.focus {
        Focus::Field(field) => field_groups(field),
        Focus::Tabs(_) => vec![FooterGroup {
            name: "TABS",
            items: vec![
                FooterItem::new("←→", "move"),
                FooterItem::new("Enter", "open"),
                FooterItem::new("Esc", "back"),
            ],
        }],
        Focus::Body => body_groups(state),
    }
}

fn field_groups(field: Field) -> Vec<FooterGroup> {
    let mut items = vec![FooterItem::new("Esc", "done")];
    match field {
        Field::ContactName | Field::ContactEmail | Field::ContactMessage => {
            items.push(FooterItem::new("Tab", "next"));
            items.push(FooterItem::new("Ctrl+S", "send"));
        }
        Field::PortfolioSearch | Field::BlogSearch => {
            items.push(FooterItem::new("Enter", "apply"));
        }
        Field::PaletteQuery => {}
    }
    vec![FooterGroup {
        name: "INPUT",
        items,
    }]
}

fn body_groups(state: &AppState) -> Vec<FooterGroup> {
    let mut groups = vec![FooterGroup {
        name: "NAV",
        items: vec![
            FooterItem::new("1-5", "section"),
            FooterItem::new("Ctrl+K", "palette"),
            FooterItem::new("Tab", "tabs"),
            FooterItem {
                key: "g",
                desc: "top",
                highlighted: state.scroll.back_to_top,
            },
        ],
    }];

    match state.nav.active {
        SectionId::Portfolio => groups.push(FooterGroup {
            name: "WORK",
            items: vec![
                FooterItem::new("j/k", "select"),
                FooterItem::new("Enter", "open"),
                FooterItem::new("/", "search"),
                FooterItem::new("f", "filter"),
                FooterItem::new("s", "sort"),
                FooterItem::new("m", "more"),
            ],
        }),
        SectionId::Blog => groups.push(FooterGroup {
            name: "BLOG",
            items: vec![
                FooterItem::new("j/k", "select"),
                FooterItem::new("Enter", "read"),
                FooterItem::new("/", "search"),
                FooterItem::new("f", "tag"),
                FooterItem::new("m", "more"),
            ],
        }),
        SectionId::Contact => groups.push(FooterGroup {
            name: "FORM",
            items: vec![
                FooterItem::new("Enter", "edit"),
                FooterItem {
                    key: "s",
                    desc: "send",
                    highlighted: state.pages.contact.is_valid(),
                },
            ],
        }),
        SectionId::About | SectionId::Resume => {}
    }

    groups.push(FooterGroup {
        name: "APP",
        items: vec![
            FooterItem::new("t", "theme"),
            FooterItem::new("l", "lang"),
            FooterItem::new("c", "email"),
            FooterItem::new("q", "quit"),
        ],
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_groups_take_over() {
        let mut state = AppState::default();
        state.palette.open();
        let groups = get_groups(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "PALETTE");
    }

    #[test]
    fn test_body_groups_follow_section() {
        let state = AppState::default();
        let names: Vec<_> = get_groups(&state).iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["NAV", "APP"]);
    }
}
