//! # World of Wealth Navigation
//!
//! App shell state: the selected tab and a page list per guide tab. Each
//! list can have one page pushed, backed by its own
//! [`PageSession`](wow_editor::PageSession).
//!
//! ```text
//! AppState
//! ├── tab: GetStarted | MakeGold | Community
//! ├── get_started: PageListState [addons, gearing]
//! └── make_gold:   PageListState [transmog, professions, flipping, sniping]
//! ```

mod app;
mod error;
mod tab;

pub use app::{AppState, PageListState};
pub use error::NavigationError;
pub use tab::Tab;
