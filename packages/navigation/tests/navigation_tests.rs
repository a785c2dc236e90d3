//! Navigating between tabs while a page is being edited

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wow_editor::{LoadError, PageGateway, SaveError};
use wow_model::{ContentBlock, GuidePage, Page, PageId};
use wow_navigation::{AppState, Tab};

#[derive(Default)]
struct CountingGateway {
    saves: Mutex<usize>,
}

#[async_trait]
impl PageGateway for CountingGateway {
    async fn load(&self, id: &PageId) -> Result<Page, LoadError> {
        Ok(Page::new(id.clone()))
    }

    async fn save(&self, _page: &Page) -> Result<(), SaveError> {
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[tokio::test]
async fn test_pop_to_root_discards_unsaved_edits() -> anyhow::Result<()> {
    let gateway = Arc::new(CountingGateway::default());
    let mut app = AppState::new(gateway.clone());

    app.tap_tab(Tab::MakeGold);
    let session = app.select_page(&GuidePage::Professions.into())?;
    session.activate().await?;
    session.toggle_edit()?;
    session.append(ContentBlock::title("Alchemy"))?;

    app.tap_tab(Tab::MakeGold);
    assert!(!app.a_page_is_active());

    // selecting again starts from a fresh load
    let session = app.select_page(&GuidePage::Professions.into())?;
    assert!(session.state().is_loading());
    session.activate().await?;
    assert_eq!(session.page().map(Page::len), Some(0));
    assert_eq!(*gateway.saves.lock().unwrap(), 0);
    Ok(())
}

#[tokio::test]
async fn test_edit_survives_tab_switch() -> anyhow::Result<()> {
    let gateway = Arc::new(CountingGateway::default());
    let mut app = AppState::new(gateway.clone());

    let session = app.select_page(&GuidePage::Addons.into())?;
    session.activate().await?;
    session.toggle_edit()?;
    session.append(ContentBlock::divider())?;

    app.update_tab(Tab::Community);
    assert!(app.active_session_mut().is_none());
    app.update_tab(Tab::GetStarted);

    let session = app.active_session_mut().expect("addons is still pushed");
    assert!(session.state().is_editing());
    session.commit_edit().await?;

    assert_eq!(*gateway.saves.lock().unwrap(), 1);
    assert_eq!(session.page().map(Page::len), Some(1));
    Ok(())
}
