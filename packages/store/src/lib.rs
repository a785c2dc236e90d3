//! # World of Wealth Store
//!
//! Document storage for guide pages and the live [`PageGateway`] built on it.
//!
//! Pages are stored the way a hosted document database would hold them: one
//! JSON document per page, keyed by page id, in the `pages` collection.
//! [`PageClient`] maps the gateway's `load`/`save` onto "fetch document by
//! id" and "upsert document by id".
//!
//! [`PageGateway`]: wow_editor::PageGateway

mod client;
mod collection;
mod error;
mod file;
mod memory;

pub use client::{seed_catalog, PageClient};
pub use collection::Collection;
pub use error::StoreError;
pub use file::FileDocumentStore;
pub use memory::MemoryDocumentStore;

use async_trait::async_trait;

/// Keyed JSON document storage, grouped in collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` if it does not exist
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError>;

    /// Create or replace a document
    async fn put_document(
        &self,
        collection: Collection,
        id: &str,
        document: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Ids of all documents in a collection, sorted
    async fn list_documents(&self, collection: Collection) -> Result<Vec<String>, StoreError>;
}
