//! In-memory document store, for tests and previews

use crate::{Collection, DocumentStore, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

type Documents = HashMap<Collection, BTreeMap<String, serde_json::Value>>;

/// Cloneable handle to a shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<Documents>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Documents> {
        // A panic while holding the lock cannot leave a map half-written
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: Collection) -> usize {
        self.lock().get(&collection).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self
            .lock()
            .get(&collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn put_document(
        &self,
        collection: Collection,
        id: &str,
        document: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.lock()
            .entry(collection)
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        Ok(self
            .lock()
            .get(&collection)
            .map(|documents| documents.keys().cloned().collect())
            .unwrap_or_default())
    }
}
