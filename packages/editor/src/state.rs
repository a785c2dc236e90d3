//! # Page State Machine
//!
//! Lifecycle of one page view, as a pure transition function. No I/O happens
//! here; [`PageSession`](crate::PageSession) pairs it with a gateway.
//!
//! ```text
//!            begin_load        load_succeeded
//!  Loading ─────────────► Loading* ─────────────► Viewing ◄──────────────┐
//!     ▲                      │                     │   ▲                 │
//!     │ reload               │ load_failed         │   │ cancel_edit     │ commit_succeeded
//!     │                      ▼                     ▼   │                 │
//!   Error ◄──────────────────┘          toggle_edit  Editing ──► Editing(saving)
//!                                                     ▲              │
//!                                                     └──────────────┘
//!                                                      commit_failed
//! ```
//!
//! `Editing` holds the working copy and an independent copy of the page as it
//! was when editing began. Mutations only ever touch the working copy.

use crate::{BlockMutation, EditorError, LoadError, SaveError};
use wow_model::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// No data yet; `in_flight` once a load has been issued
    Loading { in_flight: bool },

    /// Load failed
    Error(LoadError),

    /// Persisted snapshot
    Viewing(Page),

    /// Working copy plus the snapshot to revert to
    Editing(EditingState),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditingState {
    current: Page,
    original: Page,
    saving: bool,
    last_save_error: Option<SaveError>,
}

impl EditingState {
    fn new(page: Page) -> Self {
        Self {
            original: page.clone(),
            current: page,
            saving: false,
            last_save_error: None,
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    pub fn original(&self) -> &Page {
        &self.original
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_save_error(&self) -> Option<&SaveError> {
        self.last_save_error.as_ref()
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState::Loading { in_flight: false }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State name for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            PageState::Loading { .. } => "loading",
            PageState::Error(_) => "error",
            PageState::Viewing(_) => "viewing",
            PageState::Editing(editing) if editing.saving => "saving",
            PageState::Editing(_) => "editing",
        }
    }

    fn invalid(&self, action: &'static str) -> EditorError {
        EditorError::InvalidTransition {
            action,
            state: self.name(),
        }
    }

    /// Mark a load as issued. Returns `false` when a load is already in
    /// flight or the page is no longer loading.
    pub fn begin_load(&mut self) -> bool {
        match self {
            PageState::Loading { in_flight } if !*in_flight => {
                *in_flight = true;
                true
            }
            PageState::Loading { .. }
            | PageState::Error(_)
            | PageState::Viewing(_)
            | PageState::Editing(_) => false,
        }
    }

    pub fn load_succeeded(&mut self, page: Page) -> Result<(), EditorError> {
        match self {
            PageState::Loading { .. } => {
                *self = PageState::Viewing(page);
                Ok(())
            }
            PageState::Error(_) | PageState::Viewing(_) | PageState::Editing(_) => {
                Err(self.invalid("finish loading"))
            }
        }
    }

    pub fn load_failed(&mut self, error: LoadError) -> Result<(), EditorError> {
        match self {
            PageState::Loading { .. } => {
                *self = PageState::Error(error);
                Ok(())
            }
            PageState::Error(_) | PageState::Viewing(_) | PageState::Editing(_) => {
                Err(self.invalid("fail loading"))
            }
        }
    }

    /// Leave `Error` for a fresh `Loading` state
    pub fn reload(&mut self) -> Result<(), EditorError> {
        match self {
            PageState::Error(_) => {
                *self = PageState::default();
                Ok(())
            }
            PageState::Loading { .. } | PageState::Viewing(_) | PageState::Editing(_) => {
                Err(self.invalid("reload"))
            }
        }
    }

    /// Enter editing from viewing. Leaving editing needs an explicit
    /// commit or cancel.
    pub fn toggle_edit(&mut self) -> Result<(), EditorError> {
        match std::mem::take(self) {
            PageState::Viewing(page) => {
                *self = PageState::Editing(EditingState::new(page));
                Ok(())
            }
            editing @ PageState::Editing(_) => {
                *self = editing;
                Err(EditorError::EditInProgress)
            }
            other @ (PageState::Loading { .. } | PageState::Error(_)) => {
                *self = other;
                Err(self.invalid("start editing"))
            }
        }
    }

    /// Apply an edit to the working copy
    pub fn apply(&mut self, mutation: &BlockMutation) -> Result<(), EditorError> {
        match self {
            PageState::Editing(editing) if editing.saving => Err(EditorError::SaveInProgress),
            PageState::Editing(editing) => {
                mutation.apply(&mut editing.current.content)?;
                Ok(())
            }
            PageState::Loading { .. } | PageState::Error(_) | PageState::Viewing(_) => {
                Err(self.invalid("edit blocks"))
            }
        }
    }

    /// Mark the working copy as being saved and return it for the gateway
    pub fn begin_commit(&mut self) -> Result<Page, EditorError> {
        match self {
            PageState::Editing(editing) if editing.saving => Err(EditorError::SaveInProgress),
            PageState::Editing(editing) => {
                editing.saving = true;
                Ok(editing.current.clone())
            }
            PageState::Loading { .. } | PageState::Error(_) | PageState::Viewing(_) => {
                Err(self.invalid("commit"))
            }
        }
    }

    pub fn commit_succeeded(&mut self) -> Result<(), EditorError> {
        match std::mem::take(self) {
            PageState::Editing(editing) if editing.saving => {
                *self = PageState::Viewing(editing.current);
                Ok(())
            }
            other @ (PageState::Loading { .. }
            | PageState::Error(_)
            | PageState::Viewing(_)
            | PageState::Editing(_)) => {
                *self = other;
                Err(self.invalid("finish commit"))
            }
        }
    }

    /// Keep the edits and record why the save failed
    pub fn commit_failed(&mut self, error: SaveError) -> Result<(), EditorError> {
        match self {
            PageState::Editing(editing) if editing.saving => {
                editing.saving = false;
                editing.last_save_error = Some(error);
                Ok(())
            }
            PageState::Loading { .. }
            | PageState::Error(_)
            | PageState::Viewing(_)
            | PageState::Editing(_) => Err(self.invalid("fail commit")),
        }
    }

    /// Give up on a save whose outcome will never be reported. The edits are
    /// kept and a new commit or cancel is allowed.
    pub fn abort_commit(&mut self) -> Result<(), EditorError> {
        match self {
            PageState::Editing(editing) if editing.saving => {
                editing.saving = false;
                Ok(())
            }
            PageState::Loading { .. }
            | PageState::Error(_)
            | PageState::Viewing(_)
            | PageState::Editing(_) => Err(self.invalid("abort commit")),
        }
    }

    /// Discard the working copy. Returns `false` when already viewing.
    pub fn cancel_edit(&mut self) -> Result<bool, EditorError> {
        match std::mem::take(self) {
            PageState::Editing(editing) if !editing.saving => {
                *self = PageState::Viewing(editing.original);
                Ok(true)
            }
            saving @ PageState::Editing(_) => {
                *self = saving;
                Err(EditorError::SaveInProgress)
            }
            viewing @ PageState::Viewing(_) => {
                *self = viewing;
                Ok(false)
            }
            other @ (PageState::Loading { .. } | PageState::Error(_)) => {
                *self = other;
                Err(self.invalid("cancel editing"))
            }
        }
    }

    /// Page on screen: the snapshot while viewing, the working copy while editing
    pub fn page(&self) -> Option<&Page> {
        match self {
            PageState::Viewing(page) => Some(page),
            PageState::Editing(editing) => Some(&editing.current),
            PageState::Loading { .. } | PageState::Error(_) => None,
        }
    }

    pub fn editing(&self) -> Option<&EditingState> {
        match self {
            PageState::Editing(editing) => Some(editing),
            PageState::Loading { .. } | PageState::Error(_) | PageState::Viewing(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            PageState::Error(error) => Some(error),
            PageState::Loading { .. } | PageState::Viewing(_) | PageState::Editing(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, PageState::Editing(_))
    }

    pub fn is_saving(&self) -> bool {
        self.editing().is_some_and(EditingState::is_saving)
    }

    pub fn last_save_error(&self) -> Option<&SaveError> {
        self.editing().and_then(EditingState::last_save_error)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.editing()
            .is_some_and(|editing| editing.current != editing.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wow_model::{ContentBlock, GuidePage};

    fn addons() -> Page {
        Page::with_content(GuidePage::Addons, vec![ContentBlock::title("Intro")]).unwrap()
    }

    fn viewing() -> PageState {
        let mut state = PageState::new();
        assert!(state.begin_load());
        state.load_succeeded(addons()).unwrap();
        state
    }

    #[test]
    fn test_begin_load_only_once() {
        let mut state = PageState::new();

        assert!(state.begin_load());
        assert!(!state.begin_load());
        assert_eq!(state, PageState::Loading { in_flight: true });
    }

    #[test]
    fn test_load_failure_is_terminal_until_reload() {
        let mut state = PageState::new();
        state.begin_load();
        state
            .load_failed(LoadError::Transport("offline".to_string()))
            .unwrap();

        assert_eq!(state.name(), "error");
        assert!(state.page().is_none());
        assert!(!state.begin_load());
        assert!(state.toggle_edit().is_err());

        state.reload().unwrap();
        assert_eq!(state, PageState::Loading { in_flight: false });
    }

    #[test]
    fn test_toggle_edit_snapshots_page() {
        let mut state = viewing();
        state.toggle_edit().unwrap();

        let editing = state.editing().unwrap();
        assert_eq!(editing.current(), editing.original());
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn test_toggle_while_editing_requires_commit_or_cancel() {
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state
            .apply(&BlockMutation::Append { block: ContentBlock::divider() })
            .unwrap();

        assert_eq!(state.toggle_edit(), Err(EditorError::EditInProgress));
        assert!(state.is_editing());
        assert_eq!(state.page().unwrap().len(), 2);
    }

    #[test]
    fn test_edits_outside_editing_are_rejected() {
        let mut state = viewing();
        let result = state.apply(&BlockMutation::Append { block: ContentBlock::divider() });

        assert_eq!(
            result,
            Err(EditorError::InvalidTransition { action: "edit blocks", state: "viewing" })
        );
    }

    #[test]
    fn test_saving_blocks_edits_and_second_commit() {
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state.begin_commit().unwrap();

        assert!(state.is_saving());
        assert_eq!(state.begin_commit(), Err(EditorError::SaveInProgress));
        assert_eq!(
            state.apply(&BlockMutation::Append { block: ContentBlock::spacer() }),
            Err(EditorError::SaveInProgress)
        );
        assert_eq!(state.cancel_edit(), Err(EditorError::SaveInProgress));
    }

    #[test]
    fn test_commit_failure_keeps_edits_and_records_error() {
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state
            .apply(&BlockMutation::Append { block: ContentBlock::paragraph("Body") })
            .unwrap();
        state.begin_commit().unwrap();
        state
            .commit_failed(SaveError::Transport("timeout".to_string()))
            .unwrap();

        assert!(state.is_editing());
        assert!(!state.is_saving());
        assert_eq!(state.page().unwrap().len(), 2);
        assert_eq!(
            state.last_save_error(),
            Some(&SaveError::Transport("timeout".to_string()))
        );

        // A retry is allowed after the failure
        assert!(state.begin_commit().is_ok());
    }

    #[test]
    fn test_commit_success_promotes_working_copy() {
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state
            .apply(&BlockMutation::Append { block: ContentBlock::paragraph("Body") })
            .unwrap();
        let saved = state.begin_commit().unwrap();
        state.commit_succeeded().unwrap();

        assert_eq!(state, PageState::Viewing(saved));
    }

    #[test]
    fn test_commit_success_without_begin_is_rejected() {
        let mut state = viewing();
        state.toggle_edit().unwrap();

        assert!(state.commit_succeeded().is_err());
        assert!(state.is_editing());
    }

    #[test]
    fn test_cancel_restores_original() {
        let original = addons();
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state
            .apply(&BlockMutation::Delete { indices: [0].into() })
            .unwrap();

        assert_eq!(state.cancel_edit(), Ok(true));
        assert_eq!(state.page().map(|p| p.id.clone()), Some(original.id));
        assert_eq!(state.page().unwrap().len(), 1);

        assert_eq!(state.cancel_edit(), Ok(false));
    }

    #[test]
    fn test_abort_commit_allows_retry() {
        let mut state = viewing();
        state.toggle_edit().unwrap();
        state
            .apply(&BlockMutation::Append { block: ContentBlock::divider() })
            .unwrap();
        state.begin_commit().unwrap();
        assert_eq!(state.cancel_edit(), Err(EditorError::SaveInProgress));

        state.abort_commit().unwrap();

        assert!(!state.is_saving());
        assert_eq!(state.page().unwrap().len(), 2);
        assert!(state.begin_commit().is_ok());
    }

    #[test]
    fn test_abort_commit_without_save_is_rejected() {
        let mut state = viewing();
        assert!(state.abort_commit().is_err());

        state.toggle_edit().unwrap();
        assert!(state.abort_commit().is_err());
    }
}
