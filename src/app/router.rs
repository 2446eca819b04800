use crate::app::command::Command;
use crate::domain::catalog::{blog_tags, project_categories};
use crate::domain::nav::SectionId;
use crate::domain::profile::ProfileData;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A resolved section: which renderer to use plus whatever it derives from
/// the profile once, at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    About,
    Resume,
    Portfolio { categories: Vec<String> },
    Blog { tags: Vec<String> },
    Contact,
}

impl SectionView {
    #[must_use]
    pub fn section(&self) -> SectionId {
        match self {
            SectionView::About => SectionId::About,
            SectionView::Resume => SectionId::Resume,
            SectionView::Portfolio { .. } => SectionId::Portfolio,
            SectionView::Blog { .. } => SectionId::Blog,
            SectionView::Contact => SectionId::Contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewSlot {
    Pending,
    Ready(Arc<SectionView>),
    Failed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, section: SectionId) -> Result<SectionView>;
}

/// Builds views straight from the in-memory profile.
pub struct ProfileViewLoader {
    profile: Arc<ProfileData>,
}

impl ProfileViewLoader {
    #[must_use]
    pub fn new(profile: Arc<ProfileData>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl ViewLoader for ProfileViewLoader {
    async fn load(&self, section: SectionId) -> Result<SectionView> {
        debug!(%section, "building view");
        Ok(match section {
            SectionId::About => SectionView::About,
            SectionId::Resume => SectionView::Resume,
            SectionId::Portfolio => SectionView::Portfolio {
                categories: project_categories(&self.profile.projects),
            },
            SectionId::Blog => SectionView::Blog {
                tags: blog_tags(&self.profile.blog),
            },
            SectionId::Contact => SectionView::Contact,
        })
    }
}

/// Section id to view, resolved on first adoption and cached for the session.
/// Failed loads stay failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentRouter {
    slots: HashMap<SectionId, ViewSlot>,
}

impl ContentRouter {
    /// Marks `section` pending and asks for a load if it has never been
    /// requested.
    pub fn request(&mut self, section: SectionId) -> Option<Command> {
        if self.slots.contains_key(&section) {
            return None;
        }
        self.slots.insert(section, ViewSlot::Pending);
        Some(Command::LoadView(section))
    }

    pub fn resolve(&mut self, section: SectionId, result: Result<Arc<SectionView>, String>) {
        let slot = match result {
            Ok(view) => ViewSlot::Ready(view),
            Err(message) => ViewSlot::Failed(message),
        };
        self.slots.insert(section, slot);
    }

    #[must_use]
    pub fn slot(&self, section: SectionId) -> Option<&ViewSlot> {
        self.slots.get(&section)
    }

    #[must_use]
    pub fn view(&self, section: SectionId) -> Option<&SectionView> {
        match self.slots.get(&section) {
            Some(ViewSlot::Ready(view)) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_once() {
        let mut router = ContentRouter::default();
        assert_eq!(
            router.request(SectionId::Blog),
            Some(Command::LoadView(SectionId::Blog))
        );
        assert_eq!(router.slot(SectionId::Blog), Some(&ViewSlot::Pending));
        assert_eq!(router.request(SectionId::Blog), None);
    }

    #[test]
    fn test_resolve_is_keyed_by_section() {
        let mut router = ContentRouter::default();
        router.request(SectionId::About);
        router.request(SectionId::Resume);
        router.resolve(SectionId::Resume, Ok(Arc::new(SectionView::Resume)));

        assert_eq!(router.slot(SectionId::About), Some(&ViewSlot::Pending));
        assert_eq!(router.view(SectionId::Resume), Some(&SectionView::Resume));

        router.resolve(SectionId::About, Err("boom".into()));
        assert_eq!(
            router.slot(SectionId::About),
            Some(&ViewSlot::Failed("boom".into()))
        );
        assert_eq!(router.request(SectionId::About), None);
    }

    #[tokio::test]
    async fn test_profile_loader_derives_chips() {
        let loader = ProfileViewLoader::new(Arc::new(ProfileData::builtin()));
        let view = loader.load(SectionId::Portfolio).await.unwrap();
        match view {
            SectionView::Portfolio { categories } => assert_eq!(categories[0], "All"),
            other => panic!("unexpected view {other:?}"),
        }
        for item in crate::domain::nav::NAV_ITEMS {
            assert_eq!(loader.load(item.id).await.unwrap().section(), item.id);
        }
    }
}
