//! # World of Wealth Editor
//!
//! Page lifecycle and content editing for guide pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Page, ContentBlock, PageDocument     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: page session                        │
//! │  - Load via gateway → viewing / error       │
//! │  - Edit a working copy with block mutations │
//! │  - Commit via gateway, or cancel to revert  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: PageGateway over a document store    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Explicit gateway**: sessions receive their gateway at construction
//! 2. **Value snapshots**: the revert copy is independent of the working copy
//! 3. **Explicit exit from editing**: commit or cancel, never an implicit save
//! 4. **Visible failures**: load errors become a state, save errors are kept
//!    on the editing state and returned to the caller
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wow_editor::PageSession;
//! use wow_model::{ContentBlock, GuidePage};
//!
//! let mut session = PageSession::new(GuidePage::Addons, gateway);
//! session.activate().await?;
//!
//! session.toggle_edit()?;
//! session.append(ContentBlock::paragraph("Body"))?;
//! session.commit_edit().await?;
//! ```

mod errors;
mod gateway;
mod mutations;
mod session;
mod state;

pub use errors::{EditorError, LoadError, SaveError};
pub use gateway::PageGateway;
pub use mutations::{BlockField, BlockMutation, EditError};
pub use session::PageSession;
pub use state::{EditingState, PageState};
