//! # App State
//!
//! Which tab is showing and, per guide tab, which page is pushed on top of
//! its list. A pushed page owns a fresh [`PageSession`]; popping back to the
//! list drops it along with any unsaved edits.

use crate::{NavigationError, Tab};
use std::fmt;
use std::sync::Arc;
use wow_editor::{PageGateway, PageSession};
use wow_model::{GuidePage, PageId};

/// One tab's page list and the page selected from it
pub struct PageListState {
    page_ids: Vec<PageId>,
    selected: Option<PageSession>,
    gateway: Arc<dyn PageGateway>,
}

impl PageListState {
    pub fn new(page_ids: Vec<PageId>, gateway: Arc<dyn PageGateway>) -> Self {
        Self {
            page_ids,
            selected: None,
            gateway,
        }
    }

    pub fn page_ids(&self) -> &[PageId] {
        &self.page_ids
    }

    pub fn selected(&self) -> Option<&PageSession> {
        self.selected.as_ref()
    }

    pub fn selected_mut(&mut self) -> Option<&mut PageSession> {
        self.selected.as_mut()
    }

    /// Push a page, replacing any current selection with a new session
    pub fn select(&mut self, id: &PageId) -> Result<&mut PageSession, NavigationError> {
        if !self.page_ids.contains(id) {
            return Err(NavigationError::UnknownPage(id.clone()));
        }

        tracing::debug!(page = %id, "page selected");
        Ok(self
            .selected
            .insert(PageSession::new(id.clone(), Arc::clone(&self.gateway))))
    }

    /// Pop back to the list. Returns whether a page was showing.
    pub fn deselect(&mut self) -> bool {
        match self.selected.take() {
            Some(session) => {
                tracing::debug!(page = %session.page_id(), "page deselected");
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for PageListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageListState")
            .field("page_ids", &self.page_ids)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct AppState {
    tab: Tab,
    get_started: PageListState,
    make_gold: PageListState,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PageGateway>) -> Self {
        let ids = |pages: &[GuidePage]| -> Vec<PageId> {
            pages.iter().copied().map(PageId::from).collect()
        };

        Self {
            tab: Tab::default(),
            get_started: PageListState::new(ids(&GuidePage::GET_STARTED), Arc::clone(&gateway)),
            make_gold: PageListState::new(ids(&GuidePage::MAKE_GOLD), gateway),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Swipe to a tab; selections on every tab are kept
    pub fn update_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(from = %self.tab, to = %tab, "tab changed");
            self.tab = tab;
        }
    }

    /// Tap a tab button. Tapping the current tab pops its list back to root.
    pub fn tap_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.update_tab(tab);
            return;
        }

        if let Some(list) = self.list_mut(tab) {
            if list.deselect() {
                tracing::debug!(tab = %tab, "popped to root");
            }
        }
    }

    /// Whether the current tab has a page pushed
    pub fn a_page_is_active(&self) -> bool {
        self.list(self.tab)
            .is_some_and(|list| list.selected().is_some())
    }

    pub fn list(&self, tab: Tab) -> Option<&PageListState> {
        match tab {
            Tab::GetStarted => Some(&self.get_started),
            Tab::MakeGold => Some(&self.make_gold),
            Tab::Community => None,
        }
    }

    pub fn list_mut(&mut self, tab: Tab) -> Option<&mut PageListState> {
        match tab {
            Tab::GetStarted => Some(&mut self.get_started),
            Tab::MakeGold => Some(&mut self.make_gold),
            Tab::Community => None,
        }
    }

    /// Select a page on the current tab
    pub fn select_page(&mut self, id: &PageId) -> Result<&mut PageSession, NavigationError> {
        let tab = self.tab;
        self.list_mut(tab)
            .ok_or(NavigationError::NoPageList(tab))?
            .select(id)
    }

    /// Session of the page pushed on the current tab
    pub fn active_session_mut(&mut self) -> Option<&mut PageSession> {
        let tab = self.tab;
        self.list_mut(tab).and_then(PageListState::selected_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wow_editor::{LoadError, SaveError};
    use wow_model::Page;

    struct EmptyGateway;

    #[async_trait]
    impl PageGateway for EmptyGateway {
        async fn load(&self, id: &PageId) -> Result<Page, LoadError> {
            Ok(Page::new(id.clone()))
        }

        async fn save(&self, _page: &Page) -> Result<(), SaveError> {
            Ok(())
        }
    }

    fn app() -> AppState {
        AppState::new(Arc::new(EmptyGateway))
    }

    #[test]
    fn test_initial_lists() {
        let app = app();

        assert_eq!(app.tab(), Tab::GetStarted);
        assert!(!app.a_page_is_active());
        assert_eq!(
            app.list(Tab::GetStarted).unwrap().page_ids(),
            &[PageId::from(GuidePage::Addons), PageId::from(GuidePage::Gearing)]
        );
        assert_eq!(app.list(Tab::MakeGold).unwrap().page_ids().len(), 4);
        assert!(app.list(Tab::Community).is_none());
    }

    #[test]
    fn test_select_starts_loading() {
        let mut app = app();

        let session = app.select_page(&GuidePage::Gearing.into()).unwrap();
        assert!(session.state().is_loading());
        assert!(app.a_page_is_active());
    }

    #[test]
    fn test_select_unlisted_page() {
        let mut app = app();

        let result = app.select_page(&GuidePage::Sniping.into()).map(|_| ());
        assert_eq!(
            result,
            Err(NavigationError::UnknownPage(GuidePage::Sniping.into()))
        );

        app.update_tab(Tab::Community);
        let result = app.select_page(&GuidePage::Sniping.into()).map(|_| ());
        assert_eq!(result, Err(NavigationError::NoPageList(Tab::Community)));
    }

    #[test]
    fn test_tap_current_tab_pops_to_root() {
        let mut app = app();
        app.select_page(&GuidePage::Addons.into()).unwrap();

        app.tap_tab(Tab::GetStarted);

        assert!(!app.a_page_is_active());
        assert!(app.active_session_mut().is_none());
    }

    #[test]
    fn test_switching_tabs_keeps_selection() {
        let mut app = app();
        app.select_page(&GuidePage::Addons.into()).unwrap();

        app.tap_tab(Tab::MakeGold);
        assert_eq!(app.tab(), Tab::MakeGold);
        assert!(!app.a_page_is_active());

        app.update_tab(Tab::GetStarted);
        assert!(app.a_page_is_active());
    }

    #[test]
    fn test_tap_community_twice_is_noop() {
        let mut app = app();
        app.tap_tab(Tab::Community);
        app.tap_tab(Tab::Community);

        assert_eq!(app.tab(), Tab::Community);
        assert!(!app.a_page_is_active());
    }
}
