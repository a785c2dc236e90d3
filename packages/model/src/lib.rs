//! # World of Wealth model
//!
//! Value types shared by every layer of the guide: pages, the content blocks
//! they are composed of, the catalogue of known pages, and the persisted
//! document layout.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ document: wire layout (JSON) │
//! └──────────────────────────────┘
//!               ↕  TryFrom / From
//! ┌──────────────────────────────┐
//! │ page: Page { id, content }   │
//! │ block: ContentBlock          │
//! └──────────────────────────────┘
//! ```
//!
//! A [`Page`] owns its blocks by value; cloning a page gives an independent
//! copy, which is what the editing layer relies on for revert-to-original.

mod block;
mod catalog;
mod document;
mod error;
mod page;

pub use block::{BlockId, BlockKind, ContentBlock};
pub use catalog::GuidePage;
pub use document::{ContentBlockDocument, PageDocument};
pub use error::ModelError;
pub use page::{Page, PageId};
