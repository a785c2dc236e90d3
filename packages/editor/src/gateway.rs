//! # Page Gateway
//!
//! The seam between the editing core and wherever pages live. The core issues
//! at most one `load` per loading session and one `save` per commit; each
//! resolves exactly once. Retry policy belongs to the caller.

use crate::{LoadError, SaveError};
use async_trait::async_trait;
use wow_model::{Page, PageId};

#[async_trait]
pub trait PageGateway: Send + Sync {
    /// Fetch the page document by id
    async fn load(&self, id: &PageId) -> Result<Page, LoadError>;

    /// Upsert the full page document under `page.id`
    async fn save(&self, page: &Page) -> Result<(), SaveError>;
}
