//! Live page gateway over a [`DocumentStore`]

use crate::{Collection, DocumentStore, StoreError};
use async_trait::async_trait;
use wow_editor::{LoadError, PageGateway, SaveError};
use wow_model::{GuidePage, Page, PageDocument, PageId};

#[derive(Debug, Clone)]
pub struct PageClient<S> {
    store: S,
}

impl<S: DocumentStore> PageClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ids of every page document in the store
    pub async fn page_ids(&self) -> Result<Vec<PageId>, StoreError> {
        let ids = self.store.list_documents(Collection::Pages).await?;
        Ok(ids.iter().map(|id| PageId::parse(id)).collect())
    }
}

#[async_trait]
impl<S: DocumentStore> PageGateway for PageClient<S> {
    async fn load(&self, id: &PageId) -> Result<Page, LoadError> {
        let value = self
            .store
            .get_document(Collection::Pages, id.as_str())
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?
            .ok_or_else(|| LoadError::NotFound(id.clone()))?;

        let document =
            PageDocument::from_json(value).map_err(|e| LoadError::Decode(e.to_string()))?;
        // Saves are keyed by the page's own id
        if document.id != id.as_str() {
            tracing::warn!(page = %id, stored_id = %document.id, "document id mismatch");
            return Err(LoadError::Decode(format!(
                "document '{}' holds page '{}'",
                id, document.id
            )));
        }
        Page::try_from(document).map_err(|e| LoadError::Decode(e.to_string()))
    }

    async fn save(&self, page: &Page) -> Result<(), SaveError> {
        let value = PageDocument::from(page)
            .to_json()
            .map_err(|e| SaveError::Encode(e.to_string()))?;

        self.store
            .put_document(Collection::Pages, page.id.as_str(), value)
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))
    }
}

/// Create an empty document for every catalogue page that has none.
/// Returns the pages that were created.
pub async fn seed_catalog<S: DocumentStore>(store: &S) -> Result<Vec<GuidePage>, StoreError> {
    let mut created = Vec::new();

    for page in GuidePage::ALL {
        if store
            .get_document(Collection::Pages, page.as_str())
            .await?
            .is_some()
        {
            continue;
        }

        let document = PageDocument::from(&Page::new(page));
        store
            .put_document(Collection::Pages, page.as_str(), serde_json::to_value(&document)?)
            .await?;
        tracing::info!(page = %page, "seeded empty page");
        created.push(page);
    }

    Ok(created)
}
