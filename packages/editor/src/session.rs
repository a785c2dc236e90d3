//! # Page Session
//!
//! Drives one page view: owns its [`PageState`] and issues the gateway calls
//! that the state machine asks for.
//!
//! A session is created per page activation and dropped when the view goes
//! away. It expects one owner issuing one operation at a time.

use crate::{BlockMutation, EditorError, PageGateway, PageState, SaveError};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use wow_model::{BlockId, ContentBlock, Page, PageId};

pub struct PageSession {
    page_id: PageId,
    state: PageState,
    gateway: Arc<dyn PageGateway>,
}

impl PageSession {
    pub fn new(page_id: impl Into<PageId>, gateway: Arc<dyn PageGateway>) -> Self {
        Self {
            page_id: page_id.into(),
            state: PageState::new(),
            gateway,
        }
    }

    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Page currently shown, if any
    pub fn page(&self) -> Option<&Page> {
        self.state.page()
    }

    /// Load the page if it has not been loaded yet
    ///
    /// A no-op unless the session is in a fresh `Loading` state. On failure
    /// the session moves to `Error` and the load error is returned.
    pub async fn activate(&mut self) -> Result<(), EditorError> {
        if !self.state.begin_load() {
            tracing::debug!(page = %self.page_id, state = self.state.name(), "activate ignored");
            return Ok(());
        }

        tracing::debug!(page = %self.page_id, "loading page");
        match self.gateway.load(&self.page_id).await {
            Ok(page) => {
                tracing::info!(page = %self.page_id, blocks = page.len(), "page loaded");
                self.state.load_succeeded(page)
            }
            Err(error) => {
                tracing::warn!(page = %self.page_id, %error, "page failed to load");
                self.state.load_failed(error.clone())?;
                Err(error.into())
            }
        }
    }

    /// Retry after a failed load
    pub async fn reload(&mut self) -> Result<(), EditorError> {
        self.state.reload()?;
        self.activate().await
    }

    /// Enter editing mode
    pub fn toggle_edit(&mut self) -> Result<(), EditorError> {
        self.state.toggle_edit()?;
        tracing::debug!(page = %self.page_id, "editing started");
        Ok(())
    }

    /// Apply an edit to the working copy
    pub fn apply(&mut self, mutation: BlockMutation) -> Result<(), EditorError> {
        self.state.apply(&mutation)?;
        tracing::debug!(page = %self.page_id, op = mutation.name(), "block mutation applied");
        Ok(())
    }

    pub fn append(&mut self, block: ContentBlock) -> Result<(), EditorError> {
        self.apply(BlockMutation::Append { block })
    }

    pub fn delete_at(&mut self, indices: impl IntoIterator<Item = usize>) -> Result<(), EditorError> {
        self.apply(BlockMutation::Delete {
            indices: indices.into_iter().collect(),
        })
    }

    pub fn move_blocks(
        &mut self,
        from: impl IntoIterator<Item = usize>,
        to: usize,
    ) -> Result<(), EditorError> {
        self.apply(BlockMutation::Move {
            from: from.into_iter().collect::<BTreeSet<_>>(),
            to,
        })
    }

    pub fn set_text(&mut self, block_id: BlockId, value: impl Into<String>) -> Result<(), EditorError> {
        self.apply(BlockMutation::SetText {
            block_id,
            value: value.into(),
        })
    }

    pub fn set_label(&mut self, block_id: BlockId, label: impl Into<String>) -> Result<(), EditorError> {
        self.apply(BlockMutation::SetLabel {
            block_id,
            label: label.into(),
        })
    }

    pub fn set_url(&mut self, block_id: BlockId, url: impl Into<String>) -> Result<(), EditorError> {
        self.apply(BlockMutation::SetUrl {
            block_id,
            url: url.into(),
        })
    }

    /// Persist the working copy and return to viewing it
    ///
    /// On failure the session stays in editing with its edits intact and the
    /// error recorded on the state. If this future is dropped before the save
    /// completes the session is left saving; call
    /// [`abort_commit`](Self::abort_commit) to recover.
    pub async fn commit_edit(&mut self) -> Result<(), EditorError> {
        let page = self.begin_commit()?;
        let result = self.gateway.save(&page).await;
        self.finish_commit(result)
    }

    /// First half of [`commit_edit`](Self::commit_edit), for callers that run
    /// the save themselves
    pub fn begin_commit(&mut self) -> Result<Page, EditorError> {
        let page = self.state.begin_commit()?;
        tracing::debug!(page = %self.page_id, blocks = page.len(), "saving page");
        Ok(page)
    }

    /// Second half of [`commit_edit`](Self::commit_edit)
    pub fn finish_commit(&mut self, result: Result<(), SaveError>) -> Result<(), EditorError> {
        match result {
            Ok(()) => {
                self.state.commit_succeeded()?;
                tracing::info!(page = %self.page_id, "page saved");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(page = %self.page_id, %error, "page failed to save; edits kept");
                self.state.commit_failed(error.clone())?;
                Err(error.into())
            }
        }
    }

    /// Clear an in-flight save that was abandoned, keeping the edits
    pub fn abort_commit(&mut self) -> Result<(), EditorError> {
        self.state.abort_commit()?;
        tracing::warn!(page = %self.page_id, "save abandoned; edits kept");
        Ok(())
    }

    /// Discard the working copy and go back to the page as it was
    pub fn cancel_edit(&mut self) -> Result<bool, EditorError> {
        let cancelled = self.state.cancel_edit()?;
        if cancelled {
            tracing::debug!(page = %self.page_id, "editing cancelled");
        }
        Ok(cancelled)
    }
}

impl fmt::Debug for PageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSession")
            .field("page_id", &self.page_id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoadError, SaveError};
    use async_trait::async_trait;
    use wow_model::GuidePage;

    struct StaticGateway {
        page: Option<Page>,
    }

    #[async_trait]
    impl PageGateway for StaticGateway {
        async fn load(&self, id: &PageId) -> Result<Page, LoadError> {
            self.page.clone().ok_or_else(|| LoadError::NotFound(id.clone()))
        }

        async fn save(&self, _page: &Page) -> Result<(), SaveError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_session_creation() {
        let gateway = Arc::new(StaticGateway { page: None });
        let session = PageSession::new(GuidePage::Gearing, gateway);

        assert_eq!(session.page_id(), &PageId::Known(GuidePage::Gearing));
        assert!(session.state().is_loading());
        assert!(session.page().is_none());
    }

    #[tokio::test]
    async fn test_activate_is_idempotent_once_loaded() {
        let page = Page::with_content(GuidePage::Addons, vec![ContentBlock::title("Intro")]).unwrap();
        let gateway = Arc::new(StaticGateway { page: Some(page.clone()) });
        let mut session = PageSession::new(GuidePage::Addons, gateway);

        session.activate().await.unwrap();
        session.activate().await.unwrap();

        assert_eq!(session.state(), &PageState::Viewing(page));
    }

    #[tokio::test]
    async fn test_split_commit_reports_save_error() {
        let page = Page::new(GuidePage::Addons);
        let gateway = Arc::new(StaticGateway { page: Some(page) });
        let mut session = PageSession::new(GuidePage::Addons, gateway);
        session.activate().await.unwrap();
        session.toggle_edit().unwrap();

        let pending = session.begin_commit().unwrap();
        assert!(pending.is_empty());

        let result = session.finish_commit(Err(SaveError::Transport("offline".to_string())));
        assert_eq!(
            result,
            Err(EditorError::Save(SaveError::Transport("offline".to_string())))
        );
        assert!(session.state().is_editing());
    }
}
